//! Material record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FormRecord, RecordId};
use crate::domain::media::UploadedAsset;
use crate::domain::validation::{FormReader, RawForm, ValidationErrors};
use crate::domain::UNITS;

/// Material offered by a supplier, priced per unit.
///
/// ## Invariants
/// - `unit` is one of [`UNITS`].
/// - `price` is finite and non-negative.
/// - `image_url` is only ever set from an uploaded asset, never from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub name: String,
    pub unit: String,
    pub price: f64,
    #[schema(value_type = String, format = "uuid")]
    pub supplier_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FormRecord for MaterialRecord {
    const KIND: &'static str = "material";

    fn validate(input: &RawForm) -> Result<Self, ValidationErrors> {
        let mut reader = FormReader::new(input);
        let name = reader.required_text("name", "Name");
        let unit = reader.one_of("unit", "Unit", UNITS);
        let price = reader.required_amount("price", "Price");
        let supplier_id = reader.required_id("supplierId", "Supplier");

        let record = (|| {
            Some(Self {
                name: name?,
                unit: unit?,
                price: price?,
                supplier_id: supplier_id?,
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
