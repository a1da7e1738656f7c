//! End-to-end API integration tests
//!
//! These tests drive the complete HTTP surface through the router with
//! `tower::ServiceExt::oneshot`; no socket or external services are needed
//! since the repositories are in-memory.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use mercado_api::{api, state::AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Build a fresh application with empty stores
fn setup_app() -> Router {
    api::router(AppState::in_memory())
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn miel_payload() -> Value {
    json!({
        "name": "Miel de apiario",
        "description": "Miel pura",
        "price": "25.50",
        "stock": 10,
        "category": "Alimentos"
    })
}

async fn create_product(app: &Router, payload: &Value) -> Value {
    let response = send(app, json_request("POST", "/products/", payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_user(app: &Router, name: &str, email: &str) -> Value {
    let payload = json!({ "name": name, "email": email, "password": "secret12" });
    let response = send(app, json_request("POST", "/users/", &payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = setup_app();

    let response = send(&app, get_request("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_product_applies_defaults() {
    let app = setup_app();

    let product = create_product(&app, &miel_payload()).await;

    assert!(product["id"].is_string());
    assert_eq!(product["name"], "Miel de apiario");
    assert_eq!(product["price"], "25.50");
    assert_eq!(product["stock"], 10);
    assert_eq!(product["active"], true);
    assert_eq!(product["images"], json!([]));
}

#[tokio::test]
async fn create_product_rejects_nonpositive_price() {
    let app = setup_app();

    for price in ["0", "-1.00"] {
        let mut payload = miel_payload();
        payload["price"] = json!(price);

        let response = send(&app, json_request("POST", "/products/", &payload)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    // Validation happens at the boundary; nothing reached the store
    let listing = send(&app, get_request("/products/")).await;
    assert_eq!(body_json(listing).await, json!([]));
}

#[tokio::test]
async fn create_product_rejects_out_of_range_fields() {
    let app = setup_app();

    let mut short_name = miel_payload();
    short_name["name"] = json!("M");
    let response = send(&app, json_request("POST", "/products/", &short_name)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut negative_stock = miel_payload();
    negative_stock["stock"] = json!(-3);
    let response = send(&app, json_request("POST", "/products/", &negative_stock)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut short_category = miel_payload();
    short_category["category"] = json!("A");
    let response = send(&app, json_request("POST", "/products/", &short_category)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_list_update_product_flow() {
    let app = setup_app();
    let product = create_product(&app, &miel_payload()).await;
    let id = product["id"].as_str().unwrap();

    let listing = send(&app, get_request("/products/")).await;
    assert_eq!(listing.status(), StatusCode::OK);
    assert_eq!(body_json(listing).await.as_array().unwrap().len(), 1);

    let response = send(
        &app,
        json_request("PUT", &format!("/products/{}", id), &json!({ "stock": 15 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["stock"], 15);
    // Absent fields keep their prior values
    assert_eq!(updated["name"], "Miel de apiario");
    assert_eq!(updated["price"], "25.50");
    assert_eq!(updated["category"], "Alimentos");
    assert_eq!(updated["active"], true);
}

#[tokio::test]
async fn empty_patch_leaves_product_unchanged() {
    let app = setup_app();
    let product = create_product(&app, &miel_payload()).await;
    let id = product["id"].as_str().unwrap();

    let response = send(
        &app,
        json_request("PUT", &format!("/products/{}", id), &json!({})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, product);
}

#[tokio::test]
async fn update_rejects_invalid_price() {
    let app = setup_app();
    let product = create_product(&app, &miel_payload()).await;
    let id = product["id"].as_str().unwrap();

    let response = send(
        &app,
        json_request(
            "PUT",
            &format!("/products/{}", id),
            &json!({ "price": "-5.00" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_product_returns_404() {
    let app = setup_app();
    let missing = uuid::Uuid::new_v4();

    let response = send(&app, get_request(&format!("/products/{}", missing))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());

    let response = send(
        &app,
        json_request("PUT", &format!("/products/{}", missing), &json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, empty_request("DELETE", &format!("/products/{}", missing))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_with_filters_searches_the_catalog() {
    let app = setup_app();
    create_product(&app, &miel_payload()).await;
    create_product(
        &app,
        &json!({
            "name": "Vela de miel",
            "price": "12.00",
            "stock": 4,
            "category": "Hogar"
        }),
    )
    .await;
    create_product(
        &app,
        &json!({
            "name": "Queso de altura",
            "price": "30.00",
            "stock": 2,
            "category": "Alimentos"
        }),
    )
    .await;

    let response = send(&app, get_request("/products/?q=miel")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    // Category match is case-insensitive and exact
    let response = send(&app, get_request("/products/?category=alimentos")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = send(&app, get_request("/products/?q=miel&category=alimentos")).await;
    let hits = body_json(response).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "Miel de apiario");

    // Empty filter values behave like no filters at all
    let response = send(&app, get_request("/products/?q=&category=")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn add_stock_increments_by_positive_amount() {
    let app = setup_app();
    let product = create_product(&app, &miel_payload()).await;
    let id = product["id"].as_str().unwrap();

    let response = send(
        &app,
        empty_request("POST", &format!("/products/{}/stock/5", id)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["stock"], 15);
}

#[tokio::test]
async fn add_stock_rejects_nonpositive_amount() {
    let app = setup_app();
    let product = create_product(&app, &miel_payload()).await;
    let id = product["id"].as_str().unwrap();

    for amount in ["0", "-5"] {
        let response = send(
            &app,
            empty_request("POST", &format!("/products/{}/stock/{}", id, amount)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Stock is untouched after the failed calls
    let response = send(&app, get_request(&format!("/products/{}", id))).await;
    assert_eq!(body_json(response).await["stock"], 10);
}

#[tokio::test]
async fn add_stock_validates_amount_before_looking_up_the_product() {
    let app = setup_app();

    // A non-positive amount is rejected even when the product does not exist
    let response = send(
        &app,
        empty_request(
            "POST",
            &format!("/products/{}/stock/0", uuid::Uuid::new_v4()),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_stock_unknown_product_returns_404() {
    let app = setup_app();

    let response = send(
        &app,
        empty_request(
            "POST",
            &format!("/products/{}/stock/5", uuid::Uuid::new_v4()),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_product_removes_it() {
    let app = setup_app();
    let product = create_product(&app, &miel_payload()).await;
    let id = product["id"].as_str().unwrap();

    let response = send(&app, empty_request("DELETE", &format!("/products/{}", id))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get_request(&format!("/products/{}", id))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_user_and_add_address() {
    let app = setup_app();
    let user = create_user(&app, "Ana", "ana@example.com").await;
    let id = user["id"].as_str().unwrap();

    assert_eq!(user["is_active"], true);
    assert_eq!(user["addresses"], json!([]));

    let response = send(
        &app,
        json_request(
            "POST",
            &format!("/users/{}/addresses", id),
            &json!({ "street": "Av. Libertad", "city": "Cochabamba" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get_request(&format!("/users/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["addresses"][0]["city"], "Cochabamba");
    assert_eq!(fetched["addresses"][0]["street"], "Av. Libertad");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = setup_app();
    let first = create_user(&app, "Ana", "ana@example.com").await;

    let payload = json!({
        "name": "Otra Ana",
        "email": "ana@example.com",
        "password": "secret12"
    });
    let response = send(&app, json_request("POST", "/users/", &payload)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_json(response).await["error"].is_string());

    // The first user is unmodified
    let id = first["id"].as_str().unwrap();
    let response = send(&app, get_request(&format!("/users/{}", id))).await;
    assert_eq!(body_json(response).await, first);
}

#[tokio::test]
async fn create_user_rejects_invalid_payloads() {
    let app = setup_app();

    let bad_email = json!({ "name": "Ana", "email": "not-an-email", "password": "secret12" });
    let response = send(&app, json_request("POST", "/users/", &bad_email)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let short_password = json!({ "name": "Ana", "email": "ana@example.com", "password": "abc" });
    let response = send(&app, json_request("POST", "/users/", &short_password)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let short_name = json!({ "name": "A", "email": "ana@example.com", "password": "secret12" });
    let response = send(&app, json_request("POST", "/users/", &short_name)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_user_changes_only_present_fields() {
    let app = setup_app();
    let user = create_user(&app, "Ana", "ana@example.com").await;
    let id = user["id"].as_str().unwrap();

    let response = send(
        &app,
        json_request(
            "PUT",
            &format!("/users/{}", id),
            &json!({ "name": "Ana Maria" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Ana Maria");
    assert_eq!(updated["email"], "ana@example.com");
}

#[tokio::test]
async fn deactivate_user_is_idempotent_and_keeps_the_record() {
    let app = setup_app();
    let user = create_user(&app, "Ana", "ana@example.com").await;
    let id = user["id"].as_str().unwrap();

    for _ in 0..2 {
        let response = send(&app, empty_request("DELETE", &format!("/users/{}", id))).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    // Soft delete: the user is still listable, just inactive
    let response = send(&app, get_request("/users/")).await;
    let users = body_json(response).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["is_active"], false);
}

#[tokio::test]
async fn unknown_user_returns_404() {
    let app = setup_app();
    let missing = uuid::Uuid::new_v4();

    let response = send(&app, get_request(&format!("/users/{}", missing))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        json_request("PUT", &format!("/users/{}", missing), &json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        json_request(
            "POST",
            &format!("/users/{}/addresses", missing),
            &json!({ "street": "Av. Libertad", "city": "Cochabamba" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, empty_request("DELETE", &format!("/users/{}", missing))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
