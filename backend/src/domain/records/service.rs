//! Service record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FormRecord, RecordId};
use crate::domain::media::UploadedAsset;
use crate::domain::validation::{FormReader, RawForm, ValidationErrors};

/// Quotable service bundling zero or more materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub material_ids: Vec<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FormRecord for ServiceRecord {
    const KIND: &'static str = "service";

    fn validate(input: &RawForm) -> Result<Self, ValidationErrors> {
        let mut reader = FormReader::new(input);
        let name = reader.required_text("name", "Name");
        let description = reader.optional_text("description", "Description");
        let material_ids = reader.id_list("materialIds", "Materials");

        let record = (|| {
            Some(Self {
                name: name?,
                description,
                material_ids: material_ids?,
                image_url: None,
            })
        })();
        reader.finish(record)
    }

    fn accepts_image() -> bool {
        true
    }

    fn attach_image(&mut self, asset: &UploadedAsset) {
        self.image_url = Some(asset.url.clone());
    }
}
