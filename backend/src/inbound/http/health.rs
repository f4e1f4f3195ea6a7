//! Health endpoints for orchestration.
//!
//! ```text
//! GET /health/ready -> {"status":"ready","uploads":"media_host"}
//! GET /health/live  -> {"status":"alive"}
//! ```
//!
//! Readiness also reports where images go, so a deployment that silently
//! fell back to placeholder uploads is visible from the probe.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, HttpResponseBuilder, get, http::header, web};
use serde::Serialize;
use serde_json::json;

/// Destination of uploaded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadTarget {
    /// Images are sent to the configured media host.
    MediaHost,
    /// No media account is configured; placeholder URLs are stored.
    Fixture,
}

/// Readiness flag and upload wiring reported by the probes.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    uploads: UploadTarget,
}

impl HealthState {
    /// State that is not ready yet, uploading to `uploads`.
    pub fn new(uploads: UploadTarget) -> Self {
        Self {
            ready: AtomicBool::new(false),
            uploads,
        }
    }

    /// Mark the server as accepting traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn uploads(&self) -> UploadTarget {
        self.uploads
    }
}

fn uncached(mut builder: HttpResponseBuilder, body: serde_json::Value) -> HttpResponse {
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(body)
}

/// Readiness probe: 200 once the socket is bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is still starting")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let (builder, status) = if state.is_ready() {
        (HttpResponse::Ok(), "ready")
    } else {
        (HttpResponse::ServiceUnavailable(), "starting")
    };
    uncached(
        builder,
        json!({ "status": status, "uploads": state.uploads() }),
    )
}

/// Liveness probe: answers whenever a worker can run a handler.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    uncached(HttpResponse::Ok(), json!({ "status": "alive" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    #[rstest]
    #[case(UploadTarget::MediaHost, "media_host")]
    #[case(UploadTarget::Fixture, "fixture")]
    #[actix_web::test]
    async fn readiness_reports_status_and_upload_target(
        #[case] uploads: UploadTarget,
        #[case] expected: &str,
    ) {
        let state = web::Data::new(HealthState::new(uploads));
        let app = test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "status": "starting", "uploads": expected }));

        state.mark_ready();
        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "ready");
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_needs_no_state() {
        let app = test::init_service(App::new().service(live)).await;

        let req = test::TestRequest::get().uri("/health/live").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "alive" }));
    }
}
