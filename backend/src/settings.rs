//! Service configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `QUOTATION_*` environment
//! variables, and command-line flags, in increasing precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_MEDIA_BASE_URL: &str = "https://api.cloudinary.com";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("bind address {value:?} is not a socket address: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("media base URL {value:?} is invalid: {source}")]
    MediaBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Runtime settings for the HTTP server and the media host adapter.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QUOTATION")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// Base URL of the media host API.
    pub media_base_url: Option<String>,
    /// Media host account (cloud) identifier. Without it images are not
    /// uploaded anywhere and a fixture URL is stored instead.
    pub media_account: Option<String>,
    /// Unsigned upload preset sent with every image.
    pub media_upload_preset: Option<String>,
}

impl AppSettings {
    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .trim()
            .parse()
            .map_err(|source| SettingsError::BindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// Return the media host base URL, falling back to the public API host.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MediaBaseUrl`] when the value does not parse.
    pub fn media_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .media_base_url
            .as_deref()
            .unwrap_or(DEFAULT_MEDIA_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::MediaBaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the media account id when one is configured and non-blank.
    pub fn media_account(&self) -> Option<&str> {
        self.media_account
            .as_deref()
            .map(str::trim)
            .filter(|account| !account.is_empty())
    }

    /// Return the upload preset when one is configured and non-blank.
    pub fn media_upload_preset(&self) -> Option<&str> {
        self.media_upload_preset
            .as_deref()
            .map(str::trim)
            .filter(|preset| !preset.is_empty())
    }
}
