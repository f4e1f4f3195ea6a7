//! Domain primitives, validators, and the submission use-case.
//!
//! Purpose: validate untyped form submissions into strongly typed records,
//! upload attached images, and hand the result to persistence. Types here are
//! transport agnostic; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: error payload returned to adapters.
//! - UNITS / Role: constants shared by validators and selection widgets.
//! - ValidationErrors / FormReader: rule-based field validation.
//! - SupplierRecord, UserRecord, ReportRecord, MaterialRecord, ServiceRecord.
//! - SubmissionService: validate, upload, then persist a submission.

pub mod catalogue;
pub mod constants;
pub mod error;
pub mod media;
pub mod ports;
pub mod records;
pub mod submission;
pub mod validation;

pub use self::catalogue::{CatalogueQueryService, MaterialWithSupplier, ServiceWithMaterials};
pub use self::constants::{Role, UNITS, UnknownRole, is_known_unit};
pub use self::error::{Error, ErrorCode};
pub use self::media::{ImageUpload, ProgressSink, UploadProgress, UploadedAsset};
pub use self::records::{
    FormRecord, MaterialRecord, Persisted, RecordId, ReportRecord, ServiceRecord, SupplierRecord,
    UserRecord,
};
pub use self::submission::{FormSubmission, SubmissionError, SubmissionService, SubmissionTarget};
pub use self::validation::{FormReader, RawForm, ValidationErrors};
