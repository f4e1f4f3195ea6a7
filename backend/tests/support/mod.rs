//! Shared helpers for the HTTP integration suites.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use quotation_backend::RequestId;
use quotation_backend::domain::ports::{FixtureMediaUploader, MediaUploader};
use quotation_backend::inbound::http::configure_api;
use quotation_backend::inbound::http::state::{HttpState, HttpStatePorts};
use quotation_backend::outbound::media::MediaHostUploader;
use reqwest::Url;
use serde_json::Value;
use wiremock::{Match, MockServer, Request};

pub const UPLOAD_PATH: &str = "/v1_1/demo/image/upload";

/// Matches requests whose raw body contains the given bytes.
///
/// Multipart uploads carry binary image data, which is not valid UTF-8.
pub struct BodyContainsBytes(pub &'static [u8]);

impl Match for BodyContainsBytes {
    fn matches(&self, request: &Request) -> bool {
        request
            .body
            .windows(self.0.len())
            .any(|window| window == self.0)
    }
}

/// Response pieces the suites assert on.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// State over empty in-memory stores, uploading through `uploader`.
pub fn state_with(uploader: Arc<dyn MediaUploader>) -> HttpState {
    HttpState::new(HttpStatePorts::in_memory(uploader))
}

/// State whose uploader never reaches a network.
pub fn fixture_state() -> HttpState {
    state_with(Arc::new(FixtureMediaUploader))
}

/// State uploading to a stub media host for account `demo`.
pub fn media_host_state(server: &MockServer) -> HttpState {
    let base = Url::parse(&server.uri()).expect("mock server URI");
    let uploader = MediaHostUploader::new(base, "demo")
        .expect("uploader builds")
        .with_upload_preset("unsigned");
    state_with(Arc::new(uploader))
}

/// Serve one request against the API scope over `state`.
pub async fn send(state: &HttpState, request: test::TestRequest) -> Reply {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestId)
            .service(web::scope("/api/v1").configure(configure_api)),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    Reply {
        status,
        headers,
        body,
    }
}

pub fn post(uri: &str, body: &Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

pub fn put(uri: &str, body: &Value) -> test::TestRequest {
    test::TestRequest::put().uri(uri).set_json(body)
}

pub fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get().uri(uri)
}

/// Field error messages from a validation failure body.
pub fn field_errors(body: &Value) -> &serde_json::Map<String, Value> {
    body.pointer("/details/fields")
        .and_then(Value::as_object)
        .expect("validation details carry fields")
}
