//! Form submission orchestration.
//!
//! One submission runs validation, an optional image upload, and a single
//! persistence call, strictly in that order. Any failing step ends the
//! submission; nothing reaches the persistence port unless validation and
//! the upload (when an image is attached) both succeeded.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use super::media::{ImageUpload, ProgressSink, UploadedAsset};
use super::ports::{MediaUploader, PersistenceError, RecordRepository, UploadError};
use super::records::{FormRecord, Persisted, RecordId};
use super::validation::{RawForm, ValidationErrors};
use super::Error;

/// Whether a submission creates a record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTarget {
    Create,
    Update(RecordId),
}

/// A single user-initiated create or update action.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub target: SubmissionTarget,
    pub fields: RawForm,
    pub image: Option<ImageUpload>,
}

impl FormSubmission {
    /// Submission creating a new record from `fields`.
    pub fn create(fields: RawForm) -> Self {
        Self {
            target: SubmissionTarget::Create,
            fields,
            image: None,
        }
    }

    /// Submission replacing the record stored under `id`.
    pub fn update(id: RecordId, fields: RawForm) -> Self {
        Self {
            target: SubmissionTarget::Update(id),
            fields,
            image: None,
        }
    }

    /// Attach a new image to upload before persisting.
    #[must_use]
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

/// Failure of one submission step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// One or more fields failed validation; no network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The media host refused or failed the upload; nothing was persisted.
    #[error(transparent)]
    Upload(#[from] UploadError),
    /// The persistence layer rejected or failed the write.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl From<SubmissionError> for Error {
    fn from(value: SubmissionError) -> Self {
        match value {
            SubmissionError::Validation(errors) => {
                Error::invalid_request("submission failed validation")
                    .with_details(json!({ "fields": errors }))
            }
            SubmissionError::Upload(error) => Error::upload_failed("image upload failed")
                .with_details(json!({
                    "reason": error.to_string(),
                    "retryable": error.is_retryable(),
                })),
            SubmissionError::Persistence(error) => error.into(),
        }
    }
}

impl From<PersistenceError> for Error {
    fn from(value: PersistenceError) -> Self {
        match value {
            PersistenceError::NotFound { .. } => Error::not_found(value.to_string()),
            PersistenceError::Conflict { .. } => Error::conflict(value.to_string()),
            PersistenceError::Unavailable { .. } => {
                Error::service_unavailable("records are unavailable; please try again")
            }
        }
    }
}

fn image_rejection<R: FormRecord>() -> ValidationErrors {
    ValidationErrors::single(
        "image",
        format!("Images are not accepted for {} submissions", R::KIND),
    )
}

/// Fail with `NotFound` before uploading an image for an update that can
/// never be stored.
async fn ensure_exists<R: FormRecord>(
    repository: &dyn RecordRepository<R>,
    id: RecordId,
) -> Result<(), PersistenceError> {
    match repository.find(id).await? {
        Some(_) => Ok(()),
        None => Err(PersistenceError::not_found(R::KIND, id.to_string())),
    }
}

/// Runs submissions against the media host and a record repository.
#[derive(Clone)]
pub struct SubmissionService {
    uploader: Arc<dyn MediaUploader>,
}

impl SubmissionService {
    /// Build a service uploading images through `uploader`.
    pub fn new(uploader: Arc<dyn MediaUploader>) -> Self {
        Self { uploader }
    }

    /// Validate, optionally upload, then persist one submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Validation`] with every failing field,
    /// [`SubmissionError::Upload`] when the attached image could not be
    /// hosted, or [`SubmissionError::Persistence`] when the final write fails.
    /// In the last case an uploaded image stays on the media host. Updates
    /// carrying an image are checked against the repository before the
    /// upload, so an unknown identifier never reaches the media host.
    pub async fn submit<R: FormRecord>(
        &self,
        repository: &dyn RecordRepository<R>,
        submission: FormSubmission,
        progress: ProgressSink,
    ) -> Result<Persisted<R>, SubmissionError> {
        let FormSubmission {
            target,
            fields,
            image,
        } = submission;

        let rejects_image = image.is_some() && !R::accepts_image();
        let mut record = match (R::validate(&fields), rejects_image) {
            (Ok(record), false) => record,
            (Ok(_), true) => return Err(image_rejection::<R>().into()),
            (Err(mut errors), rejects_image) => {
                if rejects_image {
                    errors.extend(image_rejection::<R>());
                }
                debug!(kind = R::KIND, fields = errors.len(), "submission failed validation");
                return Err(errors.into());
            }
        };

        let uploaded = match image {
            Some(image) => {
                if let SubmissionTarget::Update(id) = target {
                    ensure_exists(repository, id).await?;
                }
                let asset = self.upload::<R>(image, progress).await?;
                record.attach_image(&asset);
                Some(asset)
            }
            None => None,
        };

        let stored = match target {
            SubmissionTarget::Create => repository.create(record).await,
            SubmissionTarget::Update(id) => repository.update(id, record).await,
        };

        match stored {
            Ok(persisted) => {
                info!(kind = R::KIND, id = %persisted.id, "submission persisted");
                Ok(persisted)
            }
            Err(error) => {
                if let Some(asset) = uploaded {
                    warn!(
                        kind = R::KIND,
                        public_id = %asset.public_id,
                        url = %asset.url,
                        %error,
                        "uploaded image orphaned after persistence failure"
                    );
                }
                Err(error.into())
            }
        }
    }

    async fn upload<R: FormRecord>(
        &self,
        image: ImageUpload,
        progress: ProgressSink,
    ) -> Result<UploadedAsset, UploadError> {
        let size = image.len();
        match self.uploader.upload(image, progress).await {
            Ok(asset) => {
                debug!(kind = R::KIND, size, url = %asset.url, "image uploaded");
                Ok(asset)
            }
            Err(error) => {
                warn!(kind = R::KIND, size, %error, "image upload failed");
                Err(error)
            }
        }
    }
}
