//! Media host outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `MediaUploader`
//! port against the media host's unsigned image upload endpoint.

mod dto;
mod http_uploader;

pub use http_uploader::{MediaHostConfigError, MediaHostUploader};
