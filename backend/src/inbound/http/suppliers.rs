//! Suppliers API handlers.
//!
//! ```text
//! POST /api/v1/suppliers {...fields}
//! PUT /api/v1/suppliers/{id} {...fields}
//! ```

use actix_web::{HttpResponse, post, put, web};

use crate::domain::{Error, RawForm, SupplierRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::StoredSupplier;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::submission::{parse_record_id, submit};

/// Create a supplier from a form submission.
#[utoipa::path(
    post,
    path = "/api/v1/suppliers",
    request_body = SupplierRecord,
    responses(
        (status = 201, description = "Supplier created", body = StoredSupplier),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["suppliers"],
    operation_id = "createSupplier"
)]
#[post("/suppliers")]
pub async fn create_supplier(
    state: web::Data<HttpState>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let persisted = submit(&state, state.suppliers.as_ref(), None, payload).await?;
    Ok(HttpResponse::Created().json(persisted))
}

/// Replace every field of an existing supplier.
#[utoipa::path(
    put,
    path = "/api/v1/suppliers/{id}",
    params(("id" = String, Path, description = "Supplier identifier")),
    request_body = SupplierRecord,
    responses(
        (status = 200, description = "Supplier updated", body = StoredSupplier),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 404, description = "Supplier not found", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["suppliers"],
    operation_id = "updateSupplier"
)]
#[put("/suppliers/{id}")]
pub async fn update_supplier(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path)?;
    let persisted = submit(&state, state.suppliers.as_ref(), Some(id), payload).await?;
    Ok(HttpResponse::Ok().json(persisted))
}
