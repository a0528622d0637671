//! Integration tests for the error response contract: every failure body
//! carries `{ "error": message, "code": CODE }`.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: domain 404 carries the structured error body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_body_has_error_and_code() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/assets/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;

    assert_matches!(json["code"].as_str(), Some("NOT_FOUND"));
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("Asset"), "got: {message}");
    assert!(message.contains("424242"), "got: {message}");
}

// ---------------------------------------------------------------------------
// Test: validation failures surface the offending detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_explains_the_problem() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/assets")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"name":"","kind":"image","size_mb":1.0,"uploaded_by":"x"}"#,
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_matches!(json["code"].as_str(), Some("VALIDATION_ERROR"));
    assert!(json["error"].as_str().unwrap().contains("must not be empty"));
}

// ---------------------------------------------------------------------------
// Test: malformed JSON bodies are a client error, not a 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_body_is_a_client_error() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/assets/filter")
        .header("content-type", "application/json")
        .body(Body::from("{ this is not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(
        response.status().is_client_error(),
        "expected 4xx, got {}",
        response.status()
    );
}
