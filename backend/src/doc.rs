//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint from the inbound layer together
//! with the record and error schemas. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Error, ErrorCode, MaterialRecord, ReportRecord, Role, ServiceRecord, SupplierRecord,
    UserRecord,
};
use crate::inbound::http::schemas::{
    MaterialListing, ServiceListing, StoredMaterial, StoredReport, StoredService, StoredSupplier,
    StoredUser,
};
use crate::inbound::http::submission::ImageBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quotation backend API",
        description = "Catalogue and staff record submission with image upload."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::suppliers::create_supplier,
        crate::inbound::http::suppliers::update_supplier,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::reports::create_report,
        crate::inbound::http::materials::create_material,
        crate::inbound::http::materials::update_material,
        crate::inbound::http::materials::list_materials,
        crate::inbound::http::services::create_service,
        crate::inbound::http::services::update_service,
        crate::inbound::http::services::list_services,
        crate::inbound::http::constants::list_units,
        crate::inbound::http::constants::list_roles,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        ImageBody,
        MaterialListing,
        MaterialRecord,
        ReportRecord,
        Role,
        ServiceListing,
        ServiceRecord,
        StoredMaterial,
        StoredReport,
        StoredService,
        StoredSupplier,
        StoredUser,
        SupplierRecord,
        UserRecord,
    )),
    tags(
        (name = "suppliers", description = "Supplier records"),
        (name = "users", description = "Staff user records"),
        (name = "reports", description = "Write-only incident reports"),
        (name = "materials", description = "Priced materials with images"),
        (name = "services", description = "Services bundling materials"),
        (name = "constants", description = "Selection lists for forms"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
