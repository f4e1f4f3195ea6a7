//! End-to-end behaviour of the supplier, user, and report endpoints.

#[allow(dead_code, reason = "each suite uses a subset of the shared helpers")]
mod support;

use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::json;
use support::{field_errors, fixture_state, get, post, put, send};

#[rstest]
#[actix_web::test]
async fn valid_supplier_is_created() {
    let state = fixture_state();
    let reply = send(
        &state,
        post(
            "/api/v1/suppliers",
            &json!({ "name": "Acme", "address": "123 Rd", "phoneNumber": "555-0100" }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["name"], "Acme");
    assert_eq!(reply.body["address"], "123 Rd");
    assert_eq!(reply.body["phoneNumber"], "555-0100");
    assert!(reply.body["id"].is_string());
    assert!(reply.body["updatedAt"].is_string());
    assert!(reply.headers.contains_key("request-id"));
}

#[rstest]
#[actix_web::test]
async fn user_with_unknown_role_is_rejected_on_role_only() {
    let state = fixture_state();
    let reply = send(
        &state,
        post(
            "/api/v1/users",
            &json!({
                "firstName": "A",
                "lastName": "B",
                "username": "ab",
                "phoneNumber": "555",
                "role": "Manager",
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "invalid_request");
    let fields = field_errors(&reply.body);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["role"], "Role must be one of Admin, Staff, Owner");
    assert!(state.users.list().await.expect("list users").is_empty());
}

#[rstest]
#[actix_web::test]
async fn report_without_description_is_created() {
    let state = fixture_state();
    let reply = send(&state, post("/api/v1/reports", &json!({ "type": "Damage" }))).await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["type"], "Damage");
    assert!(reply.body.get("description").is_none());
}

#[rstest]
#[actix_web::test]
async fn empty_supplier_lists_every_missing_field() {
    let state = fixture_state();
    let reply = send(&state, post("/api/v1/suppliers", &json!({}))).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let mut fields: Vec<_> = field_errors(&reply.body).keys().cloned().collect();
    fields.sort();
    assert_eq!(fields, ["address", "name", "phoneNumber"]);
}

#[rstest]
#[actix_web::test]
async fn duplicate_username_is_a_conflict() {
    let state = fixture_state();
    let user = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "username": "ada",
        "phoneNumber": "555-0101",
        "role": "Admin",
    });
    let first = send(&state, post("/api/v1/users", &user)).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = send(&state, post("/api/v1/users", &user)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["code"], "conflict");
}

#[rstest]
#[actix_web::test]
async fn supplier_update_replaces_fields() {
    let state = fixture_state();
    let created = send(
        &state,
        post(
            "/api/v1/suppliers",
            &json!({ "name": "Acme", "address": "123 Rd", "phoneNumber": "555-0100" }),
        ),
    )
    .await;
    let id = created.body["id"].as_str().expect("id").to_owned();

    let updated = send(
        &state,
        put(
            &format!("/api/v1/suppliers/{id}"),
            &json!({ "name": "Acme Ltd", "address": "9 Ln", "phoneNumber": "555-0199" }),
        ),
    )
    .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], id.as_str());
    assert_eq!(updated.body["name"], "Acme Ltd");
}

#[rstest]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", StatusCode::NOT_FOUND, "not_found")]
#[case("not-a-uuid", StatusCode::BAD_REQUEST, "invalid_request")]
#[actix_web::test]
async fn supplier_update_with_unusable_id(
    #[case] id: &str,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let state = fixture_state();
    let reply = send(
        &state,
        put(
            &format!("/api/v1/suppliers/{id}"),
            &json!({ "name": "Acme", "address": "123 Rd", "phoneNumber": "555-0100" }),
        ),
    )
    .await;

    assert_eq!(reply.status, status);
    assert_eq!(reply.body["code"], code);
}

#[rstest]
#[actix_web::test]
async fn image_on_supplier_is_a_field_error() {
    let state = fixture_state();
    let reply = send(
        &state,
        post(
            "/api/v1/suppliers",
            &json!({
                "name": "Acme",
                "address": "123 Rd",
                "phoneNumber": "555-0100",
                "image": { "fileName": "a.png", "contentType": "image/png", "data": "iVBORw==" },
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&reply.body)["image"],
        "Images are not accepted for supplier submissions"
    );
}

#[rstest]
#[actix_web::test]
async fn non_object_body_uses_the_error_shape() {
    let state = fixture_state();
    let reply = send(&state, post("/api/v1/reports", &json!(["Damage"]))).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "invalid_request");
    assert_eq!(reply.body["message"], "request body must be a JSON object");
}

#[rstest]
#[actix_web::test]
async fn constants_are_served() {
    let state = fixture_state();
    let units = send(&state, get("/api/v1/units")).await;
    let roles = send(&state, get("/api/v1/roles")).await;

    assert_eq!(units.status, StatusCode::OK);
    assert_eq!(units.body.as_array().map(Vec::len), Some(19));
    assert_eq!(roles.body, json!(["Admin", "Staff", "Owner"]));
}
