//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use quotation_backend::domain::ports::{FixtureMediaUploader, MediaUploader};
use quotation_backend::inbound::http::health::UploadTarget;
use quotation_backend::outbound::media::{MediaHostConfigError, MediaHostUploader};
use quotation_backend::settings::{AppSettings, SettingsError};
use tracing::warn;

/// Failures while turning settings into a server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    MediaHost(#[from] MediaHostConfigError),
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) uploader: Arc<dyn MediaUploader>,
    uploads: UploadTarget,
}

impl ServerConfig {
    /// Construct a configuration serving on `bind_addr` with fixture uploads.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            uploader: Arc::new(FixtureMediaUploader),
            uploads: UploadTarget::Fixture,
        }
    }

    /// Resolve settings into a configuration.
    ///
    /// Without a media account images are not hosted anywhere; the fixture
    /// uploader stores placeholder URLs instead.
    ///
    /// # Errors
    ///
    /// Returns an error when the bind address or media base URL is invalid,
    /// or when the media host client cannot be built.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, ServerConfigError> {
        let config = Self::new(settings.bind_addr()?);
        let Some(account) = settings.media_account() else {
            warn!("no media account configured; images will not be hosted");
            return Ok(config);
        };

        let mut uploader = MediaHostUploader::new(settings.media_base_url()?, account)?;
        if let Some(preset) = settings.media_upload_preset() {
            uploader = uploader.with_upload_preset(preset);
        }
        Ok(config.with_media_host(uploader))
    }

    /// Upload images through `uploader` instead of the fixture.
    #[must_use]
    pub fn with_media_host(mut self, uploader: MediaHostUploader) -> Self {
        self.uploader = Arc::new(uploader);
        self.uploads = UploadTarget::MediaHost;
        self
    }

    /// Return where uploaded images are sent.
    #[must_use]
    pub fn uploads(&self) -> UploadTarget {
        self.uploads
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
