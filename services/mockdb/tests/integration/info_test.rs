use serde_json::Value;

use crate::helpers::test_server;

#[tokio::test]
async fn should_describe_mock_database() {
    let server = test_server();

    let response = server.get("/info").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["database"], "mock_database");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn should_keep_connection_count_in_range() {
    let server = test_server();

    for _ in 0..50 {
        let body: Value = server.get("/info").await.json();
        let count = body["connection_count"].as_u64().unwrap();
        assert!((1..=10).contains(&count), "connection_count {count} out of range");
    }
}
