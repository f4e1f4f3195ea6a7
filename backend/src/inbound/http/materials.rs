//! Materials API handlers.
//!
//! ```text
//! POST /api/v1/materials {"name":"Cement","unit":"bag","price":245.5,"supplierId":"...","image":{...}}
//! PUT /api/v1/materials/{id} {...}
//! GET /api/v1/materials
//! ```
//!
//! Material submissions may carry an image; it is uploaded to the media host
//! before the record is stored, and the hosted URL becomes `imageUrl`.

use actix_web::{HttpResponse, get, post, put, web};

use crate::domain::{Error, MaterialRecord, RawForm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{MaterialListing, StoredMaterial};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::submission::{parse_record_id, submit};

/// Create a material, uploading its image first when one is attached.
#[utoipa::path(
    post,
    path = "/api/v1/materials",
    request_body(
        content = MaterialRecord,
        description = "Material fields plus an optional `image` object"
    ),
    responses(
        (status = 201, description = "Material created", body = StoredMaterial),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 502, description = "Image upload failed", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["materials"],
    operation_id = "createMaterial"
)]
#[post("/materials")]
pub async fn create_material(
    state: web::Data<HttpState>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let persisted = submit(&state, state.materials.as_ref(), None, payload).await?;
    Ok(HttpResponse::Created().json(persisted))
}

/// Replace an existing material.
///
/// Without a new image the stored `imageUrl` is cleared, as every other field
/// is replaced by the submission.
#[utoipa::path(
    put,
    path = "/api/v1/materials/{id}",
    params(("id" = String, Path, description = "Material identifier")),
    request_body(
        content = MaterialRecord,
        description = "Material fields plus an optional `image` object"
    ),
    responses(
        (status = 200, description = "Material updated", body = StoredMaterial),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 404, description = "Material not found", body = Error),
        (status = 502, description = "Image upload failed", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["materials"],
    operation_id = "updateMaterial"
)]
#[put("/materials/{id}")]
pub async fn update_material(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path)?;
    let persisted = submit(&state, state.materials.as_ref(), Some(id), payload).await?;
    Ok(HttpResponse::Ok().json(persisted))
}

/// List materials joined with their suppliers, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/materials",
    responses(
        (status = 200, description = "Materials with suppliers", body = [MaterialListing]),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["materials"],
    operation_id = "listMaterials"
)]
#[get("/materials")]
pub async fn list_materials(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let materials = state.catalogue.materials_with_suppliers().await?;
    Ok(HttpResponse::Ok().json(materials))
}
