//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::json;

async fn render(error: Error) -> (StatusCode, Error) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (status, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::upload_failed("media host down"), StatusCode::BAD_GATEWAY)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn validation_details_reach_the_client() {
    let details = json!({ "fields": { "name": "Name is required" } });
    let (status, body) = render(Error::invalid_request("bad").with_details(details.clone())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.details(), Some(&details));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let (status, body) = render(
        Error::internal("connection string leaked").with_details(json!({ "secret": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message(), "Internal server error");
    assert!(body.details().is_none());
}
