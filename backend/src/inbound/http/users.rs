//! Users API handlers.
//!
//! ```text
//! POST /api/v1/users {...fields}
//! PUT /api/v1/users/{id} {...fields}
//! ```

use actix_web::{HttpResponse, post, put, web};

use crate::domain::{Error, RawForm, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::StoredUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::submission::{parse_record_id, submit};

/// Create a user from a form submission.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRecord,
    responses(
        (status = 201, description = "User created", body = StoredUser),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 409, description = "Username already taken", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let persisted = submit(&state, state.users.as_ref(), None, payload).await?;
    Ok(HttpResponse::Created().json(persisted))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserRecord,
    responses(
        (status = 200, description = "User updated", body = StoredUser),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 409, description = "Username already taken", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path)?;
    let persisted = submit(&state, state.users.as_ref(), Some(id), payload).await?;
    Ok(HttpResponse::Ok().json(persisted))
}
