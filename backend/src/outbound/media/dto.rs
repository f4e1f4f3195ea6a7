//! DTOs for decoding media host upload responses.

use serde::Deserialize;
use url::Url;

use crate::domain::UploadedAsset;

#[derive(Debug, Deserialize)]
pub(super) struct UploadResponseDto {
    pub(super) public_id: String,
    pub(super) secure_url: Option<String>,
    pub(super) url: Option<String>,
    pub(super) format: Option<String>,
    pub(super) width: Option<u32>,
    pub(super) height: Option<u32>,
    pub(super) bytes: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponseDto {
    pub(super) error: ErrorBodyDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    pub(super) message: String,
}

impl UploadResponseDto {
    /// Prefer the HTTPS URL; reject descriptors whose URL does not parse.
    pub(super) fn into_asset(self) -> Result<UploadedAsset, String> {
        let raw = self
            .secure_url
            .or(self.url)
            .ok_or_else(|| format!("asset {} has no URL", self.public_id))?;
        let parsed =
            Url::parse(&raw).map_err(|error| format!("asset URL {raw:?} is malformed: {error}"))?;
        if !matches!(parsed.scheme(), "https" | "http") {
            return Err(format!("asset URL {raw:?} is not an HTTP URL"));
        }

        Ok(UploadedAsset {
            url: parsed.into(),
            public_id: self.public_id,
            format: self.format,
            width: self.width,
            height: self.height,
            bytes: self.bytes,
        })
    }
}
