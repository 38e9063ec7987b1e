use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::test_server;

#[tokio::test]
async fn should_list_seeded_users_in_order() {
    let server = test_server();

    let response = server.get("/users").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "John Doe", "email": "john@example.com" },
            { "id": 2, "name": "Jane Smith", "email": "jane@example.com" },
        ])
    );
}

#[tokio::test]
async fn should_list_same_users_on_repeated_calls() {
    let server = test_server();

    let first: Value = server.get("/users").await.json();
    let second: Value = server.get("/users").await.json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_get_every_listed_user_by_id() {
    let server = test_server();

    let users: Vec<Value> = server.get("/users").await.json();
    for user in users {
        let response = server.get(&format!("/users/{}", user["id"])).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), user);
    }
}

#[tokio::test]
async fn should_get_john_doe() {
    let server = test_server();

    let response = server.get("/users/1").await;

    response.assert_status_ok();
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "name": "John Doe", "email": "john@example.com" })
    );
}

#[tokio::test]
async fn should_return_404_for_missing_user() {
    let server = test_server();

    let response = server.get("/users/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "User not found" }));
}

#[tokio::test]
async fn should_treat_non_integer_user_id_as_not_found() {
    let server = test_server();

    for id in ["abc", "1.5", "1e3", "99999999999999999999", "%FF"] {
        let response = server.get(&format!("/users/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>(), json!({ "error": "User not found" }));
    }
}
