//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod media_uploader;
mod record_repository;

pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use media_uploader::MockMediaUploader;
pub use media_uploader::{FixtureMediaUploader, MediaUploader, UploadError};
pub use record_repository::{PersistenceError, RecordRepository};
