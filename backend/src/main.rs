//! Backend entry-point: loads settings and serves the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use quotation_backend::inbound::http::health::HealthState;
use quotation_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Load settings from `args`, the environment, and configuration files.
fn load_settings<I>(args: I) -> std::io::Result<AppSettings>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    AppSettings::load_from_iter(args).map_err(|error| std::io::Error::other(error.to_string()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    info!(
        bind_addr = %config.bind_addr(),
        uploads = ?config.uploads(),
        "starting quotation backend"
    );

    let health_state = web::Data::new(HealthState::new(config.uploads()));
    create_server(health_state, config)?.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn starts_from_an_empty_environment() {
        let _guard = lock_env([
            ("QUOTATION_BIND_ADDR", None::<String>),
            ("QUOTATION_MEDIA_BASE_URL", None),
            ("QUOTATION_MEDIA_ACCOUNT", None),
            ("QUOTATION_MEDIA_UPLOAD_PRESET", None),
        ]);

        let settings = load_settings([OsString::from("quotation-backend")])
            .expect("settings load without any configuration");
        let config = ServerConfig::from_settings(&settings).expect("server config");
        assert_eq!(config.bind_addr().port(), 8080);
        assert_eq!(
            config.uploads(),
            quotation_backend::inbound::http::health::UploadTarget::Fixture
        );
    }
}
