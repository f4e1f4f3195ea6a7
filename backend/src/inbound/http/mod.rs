//! HTTP inbound adapter exposing REST endpoints.

pub mod constants;
pub mod error;
pub mod health;
pub mod materials;
pub mod reports;
pub mod request_id;
pub mod schemas;
pub mod services;
pub mod state;
pub mod submission;
pub mod suppliers;
pub mod users;

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use tracing::debug;

use crate::domain::Error;

pub use error::ApiResult;

/// Largest accepted JSON body; base64 images dominate the size.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024 * 1024;

/// JSON extractor settings shared by every submission endpoint.
///
/// Malformed bodies surface as `invalid_request` errors in the standard
/// error shape instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            debug!(error = %err, "rejected JSON payload");
            let message = match &err {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    "request body is too large"
                }
                JsonPayloadError::ContentType => "request body must be application/json",
                _ => "request body must be a JSON object",
            };
            Error::invalid_request(message).into()
        })
}

/// Register the `/api/v1` routes.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use quotation_backend::inbound::http;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(http::configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(suppliers::create_supplier)
        .service(suppliers::update_supplier)
        .service(users::create_user)
        .service(users::update_user)
        .service(reports::create_report)
        .service(materials::create_material)
        .service(materials::update_material)
        .service(materials::list_materials)
        .service(services::create_service)
        .service(services::update_service)
        .service(services::list_services)
        .service(constants::list_units)
        .service(constants::list_roles);
}
