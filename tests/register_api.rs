//! HTTP-level tests for the user registration API.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use provider_directory_rs::http::{build_router, AppState};
use provider_directory_rs::store::{MemoryAccounts, MemoryDirectory};

const INVALID_PARAMS_MSG: &str = "Invalid parameters provided. Please provide valid parameters.";

fn test_server() -> TestServer {
    let state = AppState::builder()
        .with_directory(Arc::new(MemoryDirectory::new()))
        .with_accounts(Arc::new(MemoryAccounts::new()))
        .build()
        .expect("valid configuration");
    TestServer::new(build_router(state)).expect("test server")
}

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "password": "Secret3!",
        "phone_number": "5551234567"
    })
}

/// The register route exists: POST never answers 404.
#[tokio::test]
async fn register_route_exists() {
    let server = test_server();

    let response = server.post("/api/auth/register").await;
    assert_ne!(response.status_code(), StatusCode::NOT_FOUND);
}

/// The register route only accepts POST: GET answers 404.
#[tokio::test]
async fn register_wrong_method_is_not_found() {
    let server = test_server();

    let response = server.get("/api/auth/register").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// All-empty fields answer 422 with the literal compatibility body.
#[tokio::test]
async fn register_without_required_fields() {
    let server = test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "",
            "email": "",
            "password": "",
            "phone_number": ""
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<String>(), INVALID_PARAMS_MSG);
}

/// A single empty field answers 422 with the literal compatibility body.
#[tokio::test]
async fn register_without_name_field() {
    let server = test_server();

    let mut body = valid_body();
    body["name"] = json!("");
    let response = server.post("/api/auth/register").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<String>(), INVALID_PARAMS_MSG);
}

/// An absent field behaves like an empty one.
#[tokio::test]
async fn register_with_absent_field() {
    let server = test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "Secret3!"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<String>(), INVALID_PARAMS_MSG);
}

/// A too-short name answers 400, the one format failure that is not 422.
#[tokio::test]
async fn register_with_invalid_name() {
    let server = test_server();

    let mut body = valid_body();
    body["name"] = json!("j");
    let response = server.post("/api/auth/register").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// A malformed email answers 422.
#[tokio::test]
async fn register_with_invalid_email() {
    let server = test_server();

    let mut body = valid_body();
    body["email"] = json!("j");
    let response = server.post("/api/auth/register").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

/// An empty phone number answers 422.
#[tokio::test]
async fn register_with_empty_phone() {
    let server = test_server();

    let mut body = valid_body();
    body["phone_number"] = json!("");
    let response = server.post("/api/auth/register").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

/// A weak password answers 422.
#[tokio::test]
async fn register_with_weak_password() {
    let server = test_server();

    let mut body = valid_body();
    body["password"] = json!("Ji!");
    let response = server.post("/api/auth/register").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

/// A valid request answers 201 with the created account record.
#[tokio::test]
async fn register_with_valid_parameters() {
    let server = test_server();

    let response = server.post("/api/auth/register").json(&valid_body()).await;

    response.assert_status(StatusCode::CREATED);
    let record = response.json::<serde_json::Value>();
    assert_eq!(record["name"], "Jane Doe");
    assert_eq!(record["email"], "jane@example.com");
    assert_eq!(record["phone_number"], "5551234567");
    assert!(record["id"].is_u64());
    assert!(record.get("password").is_none());
}

/// Registering the same email twice answers 409.
#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let server = test_server();

    let response = server.post("/api/auth/register").json(&valid_body()).await;
    response.assert_status(StatusCode::CREATED);

    let response = server.post("/api/auth/register").json(&valid_body()).await;
    response.assert_status(StatusCode::CONFLICT);
}
