//! Catalogue and staff records produced by form validation.
//!
//! Each record type implements [`FormRecord`], tying a wire shape to the
//! validator that builds it from an untyped submission.

mod material;
mod report;
mod service;
mod supplier;
mod user;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::media::UploadedAsset;
use super::validation::{RawForm, ValidationErrors};

pub use material::MaterialRecord;
pub use report::ReportRecord;
pub use service::ServiceRecord;
pub use supplier::SupplierRecord;
pub use user::UserRecord;

/// Identifier assigned by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A record as stored, with its assigned identifier.
///
/// Serialises flat: `{ "id": ..., <record fields>, "updatedAt": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persisted<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
    pub updated_at: DateTime<Utc>,
}

impl<T> Persisted<T> {
    /// Wrap `record` under `id`, stamped with the current time.
    pub fn new(id: RecordId, record: T) -> Self {
        Self {
            id,
            record,
            updated_at: Utc::now(),
        }
    }
}

/// A record type built from a form submission.
pub trait FormRecord: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Short lowercase name used in messages and log fields.
    const KIND: &'static str;

    /// Validate an untyped submission, reporting every failing field.
    fn validate(input: &RawForm) -> Result<Self, ValidationErrors>;

    /// Whether submissions of this kind may carry an image.
    fn accepts_image() -> bool {
        false
    }

    /// Merge a hosted image into the record. Only called when
    /// [`FormRecord::accepts_image`] holds.
    fn attach_image(&mut self, _asset: &UploadedAsset) {}

    /// Value that must be unique across stored records of this kind.
    fn natural_key(&self) -> Option<&str> {
        None
    }
}
