//! Supplier record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FormRecord;
use crate::domain::validation::{FormReader, RawForm, ValidationErrors};

/// Supplier contact card.
///
/// ## Invariants
/// - `name`, `address`, and `phone_number` are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl FormRecord for SupplierRecord {
    const KIND: &'static str = "supplier";

    fn validate(input: &RawForm) -> Result<Self, ValidationErrors> {
        let mut reader = FormReader::new(input);
        let name = reader.required_text("name", "Name");
        let address = reader.required_text("address", "Address");
        let phone_number = reader.required_text("phoneNumber", "Phone number");

        let record = (|| {
            Some(Self {
                name: name?,
                address: address?,
                phone_number: phone_number?,
            })
        })();
        reader.finish(record)
    }
}
