//! Quotation backend library modules.
//!
//! - [`domain`]: records, validation, and the submission use-case.
//! - [`inbound`]: actix-web handlers.
//! - [`outbound`]: media host and storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use inbound::http::request_id::RequestId;
