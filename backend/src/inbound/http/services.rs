//! Services API handlers.
//!
//! ```text
//! POST /api/v1/services {"name":"Tiling","materialIds":["..."],"image":{...}}
//! PUT /api/v1/services/{id} {...}
//! GET /api/v1/services
//! ```

use actix_web::{HttpResponse, get, post, put, web};

use crate::domain::{Error, RawForm, ServiceRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ServiceListing, StoredService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::submission::{parse_record_id, submit};

/// Create a service bundling existing materials.
#[utoipa::path(
    post,
    path = "/api/v1/services",
    request_body(
        content = ServiceRecord,
        description = "Service fields plus an optional `image` object"
    ),
    responses(
        (status = 201, description = "Service created", body = StoredService),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 502, description = "Image upload failed", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["services"],
    operation_id = "createService"
)]
#[post("/services")]
pub async fn create_service(
    state: web::Data<HttpState>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let persisted = submit(&state, state.services.as_ref(), None, payload).await?;
    Ok(HttpResponse::Created().json(persisted))
}

/// Replace an existing service.
///
/// Without a new image the stored `imageUrl` is cleared.
#[utoipa::path(
    put,
    path = "/api/v1/services/{id}",
    params(("id" = String, Path, description = "Service identifier")),
    request_body(
        content = ServiceRecord,
        description = "Service fields plus an optional `image` object"
    ),
    responses(
        (status = 200, description = "Service updated", body = StoredService),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 404, description = "Service not found", body = Error),
        (status = 502, description = "Image upload failed", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["services"],
    operation_id = "updateService"
)]
#[put("/services/{id}")]
pub async fn update_service(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path)?;
    let persisted = submit(&state, state.services.as_ref(), Some(id), payload).await?;
    Ok(HttpResponse::Ok().json(persisted))
}

/// List services with the materials they bundle.
#[utoipa::path(
    get,
    path = "/api/v1/services",
    responses(
        (status = 200, description = "Services with materials", body = [ServiceListing]),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["services"],
    operation_id = "listServices"
)]
#[get("/services")]
pub async fn list_services(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let services = state.catalogue.services_with_materials().await?;
    Ok(HttpResponse::Ok().json(services))
}
