//! Reqwest-backed media host upload adapter.
//!
//! This adapter owns transport details only: multipart encoding, streaming
//! the image body while reporting progress, HTTP error mapping, and decoding
//! the asset descriptor. It never retries and sets no request timeout.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode, Url};

use super::dto::{ErrorResponseDto, UploadResponseDto};
use crate::domain::ports::{MediaUploader, UploadError};
use crate::domain::{ImageUpload, ProgressSink, UploadProgress, UploadedAsset};

const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
const DEFAULT_USER_AGENT: &str = "quotation-backend-media-uploader/0.1";

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum MediaHostConfigError {
    /// The account identifier was blank.
    #[error("media host account id must not be empty")]
    EmptyAccountId,
    /// The base URL cannot carry path segments.
    #[error("media host base URL {0} cannot be a base")]
    InvalidBaseUrl(Url),
    /// The HTTP client could not be constructed.
    #[error("failed to build media host client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Media host adapter posting one multipart request per image.
#[derive(Debug, Clone)]
pub struct MediaHostUploader {
    client: Client,
    endpoint: Url,
    upload_preset: Option<String>,
    chunk_size: usize,
}

impl MediaHostUploader {
    /// Build an adapter for `<base_url>/v1_1/<account_id>/image/upload`.
    /// ```rust,ignore
    /// let uploader = MediaHostUploader::new(base_url, "demo")?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the account id is blank, the base URL cannot
    /// carry a path, or the reqwest client cannot be constructed.
    pub fn new(base_url: Url, account_id: &str) -> Result<Self, MediaHostConfigError> {
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(MediaHostConfigError::EmptyAccountId);
        }

        let mut endpoint = base_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|()| MediaHostConfigError::InvalidBaseUrl(base_url))?
            .pop_if_empty()
            .extend(["v1_1", account_id, "image", "upload"]);

        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint,
            upload_preset: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
    }

    /// Send `preset` as the `upload_preset` form field on every upload.
    #[must_use]
    pub fn with_upload_preset(mut self, preset: impl Into<String>) -> Self {
        self.upload_preset = Some(preset.into());
        self
    }

    /// Override the body chunk size, which sets progress report granularity.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Fully resolved upload endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MediaUploader for MediaHostUploader {
    async fn upload(
        &self,
        image: ImageUpload,
        progress: ProgressSink,
    ) -> Result<UploadedAsset, UploadError> {
        check_image(&image)?;
        let total = image.len();
        let ImageUpload {
            file_name,
            content_type,
            data,
        } = image;

        let part = Part::stream_with_length(progress_body(data, self.chunk_size, progress), total)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|error| UploadError::invalid_image(error.to_string()))?;
        let mut form = Form::new().part("file", part);
        if let Some(preset) = &self.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_asset(body.as_ref())
    }
}

fn check_image(image: &ImageUpload) -> Result<(), UploadError> {
    if image.is_empty() {
        return Err(UploadError::invalid_image("image payload is empty"));
    }
    if !image.content_type.trim().starts_with("image/") {
        return Err(UploadError::invalid_image(format!(
            "content type {:?} is not an image",
            image.content_type
        )));
    }
    Ok(())
}

fn split_chunks(data: &Bytes, chunk_size: usize) -> Vec<Bytes> {
    let chunk_size = chunk_size.max(1);
    (0..data.len())
        .step_by(chunk_size)
        .map(|start| data.slice(start..(start + chunk_size).min(data.len())))
        .collect()
}

/// Stream `data` in chunks, reporting cumulative bytes as each chunk is
/// handed to the transport.
fn progress_body(data: Bytes, chunk_size: usize, progress: ProgressSink) -> Body {
    let total = data.len() as u64;
    let mut sent = 0_u64;
    let chunks = stream::iter(split_chunks(&data, chunk_size)).map(move |chunk| {
        sent += chunk.len() as u64;
        progress.report(UploadProgress { sent, total });
        Ok::<Bytes, std::io::Error>(chunk)
    });
    Body::wrap_stream(chunks)
}

fn parse_asset(body: &[u8]) -> Result<UploadedAsset, UploadError> {
    let decoded: UploadResponseDto = serde_json::from_slice(body).map_err(|error| {
        UploadError::decode(format!("invalid upload response JSON: {error}"))
    })?;
    decoded.into_asset().map_err(UploadError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UploadError {
    UploadError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UploadError {
    let message = serde_json::from_slice::<ErrorResponseDto>(body)
        .map(|decoded| decoded.error.message)
        .unwrap_or_else(|_| body_preview(body));
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        message
    };
    UploadError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
