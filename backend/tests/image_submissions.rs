//! Material and service submissions against a stub media host.

#[allow(dead_code, reason = "each suite uses a subset of the shared helpers")]
mod support;

use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};
use support::{
    BodyContainsBytes, UPLOAD_PATH, field_errors, fixture_state, get, media_host_state, post, put,
    send,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const HOSTED_URL: &str = "https://res.media.test/demo/image/upload/catalogue/cement.png";

fn png_image() -> Value {
    json!({ "fileName": "cement.png", "contentType": "image/png", "data": "iVBORw0KGgo=" })
}

async fn create_supplier(state: &quotation_backend::inbound::http::state::HttpState) -> String {
    let reply = send(
        state,
        post(
            "/api/v1/suppliers",
            &json!({ "name": "Acme", "address": "123 Rd", "phoneNumber": "555-0100" }),
        ),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    reply.body["id"].as_str().expect("supplier id").to_owned()
}

async fn mount_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(BodyContainsBytes(b"name=\"upload_preset\""))
        .and(BodyContainsBytes(b"filename=\"cement.png\""))
        .and(BodyContainsBytes(PNG_SIGNATURE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "public_id": "catalogue/cement",
            "secure_url": HOSTED_URL,
            "format": "png",
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[rstest]
#[actix_web::test]
async fn material_image_url_comes_from_the_media_host() {
    let server = MockServer::start().await;
    mount_success(&server).await;
    let state = media_host_state(&server);
    let supplier_id = create_supplier(&state).await;

    let reply = send(
        &state,
        post(
            "/api/v1/materials",
            &json!({
                "name": "Cement",
                "unit": "bag",
                "price": "245.50",
                "supplierId": supplier_id,
                "image": png_image(),
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["imageUrl"], HOSTED_URL);
    assert_eq!(reply.body["price"], 245.5);

    let listed = send(&state, get("/api/v1/materials")).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body[0]["supplier"]["id"], supplier_id.as_str());
    assert_eq!(listed.body[0]["imageUrl"], HOSTED_URL);
}

#[rstest]
#[actix_web::test]
async fn failed_upload_persists_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": { "message": "internal error" } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let state = media_host_state(&server);
    let supplier_id = create_supplier(&state).await;

    let reply = send(
        &state,
        post(
            "/api/v1/materials",
            &json!({
                "name": "Cement",
                "unit": "bag",
                "price": 245.5,
                "supplierId": supplier_id,
                "image": png_image(),
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
    assert_eq!(reply.body["code"], "upload_failed");
    assert_eq!(reply.body["details"]["retryable"], true);
    assert!(state.materials.list().await.expect("list materials").is_empty());
}

#[rstest]
#[actix_web::test]
async fn invalid_material_never_contacts_the_media_host() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let state = media_host_state(&server);

    let reply = send(
        &state,
        post(
            "/api/v1/materials",
            &json!({ "name": "Cement", "unit": "sack", "image": png_image() }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let fields = field_errors(&reply.body);
    assert!(fields.contains_key("unit"));
    assert!(fields.contains_key("price"));
    assert!(fields.contains_key("supplierId"));
}

#[rstest]
#[actix_web::test]
async fn undecodable_image_is_reported_with_other_fields() {
    let state = fixture_state();
    let reply = send(
        &state,
        post(
            "/api/v1/materials",
            &json!({
                "name": "Cement",
                "image": { "fileName": "c.png", "contentType": "image/png", "data": "***" },
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let fields = field_errors(&reply.body);
    assert_eq!(fields["image"], "Image data must be base64 encoded");
    assert!(fields.contains_key("unit"));
}

#[rstest]
#[actix_web::test]
async fn non_image_content_type_is_rejected_before_upload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let state = media_host_state(&server);

    let reply = send(
        &state,
        post(
            "/api/v1/services",
            &json!({
                "name": "Tiling",
                "image": { "fileName": "notes.txt", "contentType": "text/plain", "data": "aGk=" },
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
    assert_eq!(reply.body["details"]["retryable"], false);
    assert!(state.services.list().await.expect("list services").is_empty());
}

#[rstest]
#[actix_web::test]
async fn services_list_their_materials() {
    let state = fixture_state();
    let supplier_id = create_supplier(&state).await;
    let material = send(
        &state,
        post(
            "/api/v1/materials",
            &json!({ "name": "Tile", "unit": "box", "price": 30, "supplierId": supplier_id }),
        ),
    )
    .await;
    let material_id = material.body["id"].as_str().expect("material id").to_owned();

    let created = send(
        &state,
        post(
            "/api/v1/services",
            &json!({ "name": "Tiling", "materialIds": [material_id] }),
        ),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let listed = send(&state, get("/api/v1/services")).await;
    assert_eq!(listed.body[0]["name"], "Tiling");
    assert_eq!(listed.body[0]["materials"][0]["name"], "Tile");
}

#[rstest]
#[actix_web::test]
async fn material_update_without_image_clears_the_url() {
    let state = fixture_state();
    let supplier_id = create_supplier(&state).await;
    let body = json!({
        "name": "Cement",
        "unit": "bag",
        "price": 245.5,
        "supplierId": supplier_id,
        "image": png_image(),
    });
    let created = send(&state, post("/api/v1/materials", &body)).await;
    assert_eq!(
        created.body["imageUrl"],
        "https://media.invalid/fixture/cement.png"
    );
    let id = created.body["id"].as_str().expect("material id").to_owned();

    let mut replacement = body.clone();
    if let Some(fields) = replacement.as_object_mut() {
        fields.remove("image");
        fields.insert("price".into(), json!(250));
    }
    let updated = send(&state, put(&format!("/api/v1/materials/{id}"), &replacement)).await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["price"], 250.0);
    assert!(updated.body.get("imageUrl").is_none());
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_material_uploads_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let state = media_host_state(&server);
    let supplier_id = create_supplier(&state).await;

    let reply = send(
        &state,
        put(
            "/api/v1/materials/6b1f2c1e-4d59-4a8e-9a3c-0f6d2f0b9e11",
            &json!({
                "name": "Cement",
                "unit": "bag",
                "price": 245.5,
                "supplierId": supplier_id,
                "image": png_image(),
            }),
        ),
    )
    .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["code"], "not_found");
}
