//! Driven port for uploading images to the external media host.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::media::{ImageUpload, ProgressSink, UploadedAsset};

define_port_error! {
    /// Errors surfaced while uploading an image.
    pub enum UploadError {
        /// The payload was refused before any network call.
        InvalidImage { message: String } =>
            "image rejected before upload: {message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "media host transport failed: {message}",
        /// The media host answered with a non-success status.
        Status { status: u16, message: String } =>
            "media host returned status {status}: {message}",
        /// The media host response could not be decoded.
        Decode { message: String } =>
            "media host response decode failed: {message}",
    }
}

impl UploadError {
    /// Whether the user may reasonably resubmit the same image.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Decode { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidImage { .. } => false,
        }
    }
}

/// Port for sending one image to the media host.
///
/// Implementations issue exactly one request, never retry, and impose no
/// timeout of their own; callers wrap cancellation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload `image`, reporting transfer progress to `progress`.
    async fn upload(
        &self,
        image: ImageUpload,
        progress: ProgressSink,
    ) -> Result<UploadedAsset, UploadError>;
}

/// Fixture implementation that hosts nothing and echoes a placeholder URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureMediaUploader;

#[async_trait]
impl MediaUploader for FixtureMediaUploader {
    async fn upload(
        &self,
        image: ImageUpload,
        progress: ProgressSink,
    ) -> Result<UploadedAsset, UploadError> {
        let total = image.len();
        progress.report(crate::domain::UploadProgress { sent: total, total });
        Ok(UploadedAsset {
            url: format!("https://media.invalid/fixture/{}", image.file_name),
            public_id: format!("fixture/{}", image.file_name),
            format: None,
            width: None,
            height: None,
            bytes: Some(total),
        })
    }
}
