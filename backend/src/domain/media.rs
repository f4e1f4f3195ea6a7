//! Image payloads and hosted asset descriptors exchanged with the media host.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single image attached to a submission.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl ImageUpload {
    /// Bundle an image payload.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    /// Whether the payload carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Payload bytes are elided; they can be megabytes.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Descriptor of an image hosted by the media service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    /// Public HTTPS URL of the hosted image.
    pub url: String,
    /// Host-side identifier, needed to delete the asset later.
    pub public_id: String,
    pub format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bytes: Option<u64>,
}

/// Cumulative transfer progress of one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub sent: u64,
    pub total: u64,
}

/// Callback receiving upload progress.
///
/// Reports arrive with non-decreasing `sent` counts. The default sink
/// discards them.
///
/// # Examples
/// ```
/// use std::sync::{Arc, Mutex};
/// use quotation_backend::domain::{ProgressSink, UploadProgress};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = {
///     let seen = Arc::clone(&seen);
///     ProgressSink::new(move |progress| seen.lock().expect("lock").push(progress.sent))
/// };
/// sink.report(UploadProgress { sent: 4, total: 8 });
/// assert_eq!(*seen.lock().expect("lock"), vec![4]);
/// ```
#[derive(Clone, Default)]
pub struct ProgressSink(Option<Arc<dyn Fn(UploadProgress) + Send + Sync>>);

impl ProgressSink {
    /// Forward progress reports to `callback`.
    pub fn new(callback: impl Fn(UploadProgress) + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(callback)))
    }

    /// Sink that drops every report.
    pub fn discard() -> Self {
        Self(None)
    }

    /// Deliver one report.
    pub fn report(&self, progress: UploadProgress) {
        if let Some(callback) = &self.0 {
            callback(progress);
        }
    }
}

impl fmt::Debug for ProgressSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProgressSink")
            .field(&self.0.as_ref().map(|_| "callback"))
            .finish()
    }
}
