//! Selection constants for form widgets.
//!
//! ```text
//! GET /api/v1/units
//! GET /api/v1/roles
//! ```

use actix_web::{HttpResponse, get};

use crate::domain::{Role, UNITS};

/// Unit symbols accepted for materials, in display order.
#[utoipa::path(
    get,
    path = "/api/v1/units",
    responses((status = 200, description = "Unit symbols", body = [String])),
    tags = ["constants"],
    operation_id = "listUnits"
)]
#[get("/units")]
pub async fn list_units() -> HttpResponse {
    HttpResponse::Ok().json(UNITS)
}

/// Roles assignable to users.
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    responses((status = 200, description = "Role names", body = [Role])),
    tags = ["constants"],
    operation_id = "listRoles"
)]
#[get("/roles")]
pub async fn list_roles() -> HttpResponse {
    HttpResponse::Ok().json(Role::ALL)
}
