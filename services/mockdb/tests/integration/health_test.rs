use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::Value;

use crate::helpers::test_server;

#[tokio::test]
async fn should_report_healthy_with_iso_timestamp() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn should_answer_liveness_and_readiness_probes() {
    let server = test_server();

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_return_json_for_unknown_route() {
    let server = test_server();

    let response = server.get("/orders").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Not found" }));
}

#[tokio::test]
async fn should_return_json_for_unsupported_method() {
    let server = test_server();

    for response in [
        server.post("/users").await,
        server.delete("/products/1").await,
        server.put("/health").await,
    ] {
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body: Value = response.json();
        assert_eq!(body, serde_json::json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn should_generate_request_id_when_absent() {
    let server = test_server();

    let response = server.get("/health").await;

    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn should_echo_inbound_request_id() {
    let server = test_server();

    let response = server
        .get("/users")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .await;

    assert_eq!(response.headers()["x-request-id"], "req-42");
}
