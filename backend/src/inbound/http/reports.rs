//! Reports API handlers.
//!
//! ```text
//! POST /api/v1/reports {...fields}
//! ```

use actix_web::{HttpResponse, post, web};

use crate::domain::{Error, RawForm, ReportRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::StoredReport;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::submission::submit;

/// Create a report from a form submission.
#[utoipa::path(
    post,
    path = "/api/v1/reports",
    request_body = ReportRecord,
    responses(
        (status = 201, description = "Report created", body = StoredReport),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 503, description = "Persistence unavailable", body = Error)
    ),
    tags = ["reports"],
    operation_id = "createReport"
)]
#[post("/reports")]
pub async fn create_report(
    state: web::Data<HttpState>,
    payload: web::Json<RawForm>,
) -> ApiResult<HttpResponse> {
    let persisted = submit(&state, state.reports.as_ref(), None, payload).await?;
    Ok(HttpResponse::Created().json(persisted))
}
