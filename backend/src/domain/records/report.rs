//! Incident report record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FormRecord;
use crate::domain::validation::{FormReader, RawForm, ValidationErrors};

/// Report filed by staff, such as damaged stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    #[serde(rename = "type")]
    pub report_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormRecord for ReportRecord {
    const KIND: &'static str = "report";

    fn validate(input: &RawForm) -> Result<Self, ValidationErrors> {
        let mut reader = FormReader::new(input);
        let report_type = reader.required_text("type", "Type");
        let description = reader.optional_text("description", "Description");

        let record = report_type.map(|report_type| Self {
            report_type,
            description,
        });
        reader.finish(record)
    }
}
