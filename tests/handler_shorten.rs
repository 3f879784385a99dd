mod common;

use axum::http::StatusCode;
use link_shortener::domain::repositories::UrlStore;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success_with_host_header() {
    let (state, store) = common::create_test_state(None);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .add_header("Host", "localhost:8080")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(
        json["short_url"],
        format!("http://localhost:8080/r/{}", code)
    );
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_uses_configured_base_url() {
    let (state, _store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://rust-lang.org" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(json["short_url"], format!("https://s.example.com/r/{}", code));
}

#[tokio::test]
async fn test_shorten_forwarded_proto() {
    let (state, _store) = common::create_test_state(None);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .add_header("Host", "short.example.org")
        .add_header("X-Forwarded-Proto", "https")
        .json(&json!({ "url": "https://example.com/page?q=1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert!(
        json["short_url"]
            .as_str()
            .unwrap()
            .starts_with("https://short.example.org/r/")
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_entries() {
    let (state, store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = common::create_test_server(state);

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short_code"], second["short_code"]);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid URL format");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = common::create_test_server(state);

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid URL format");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (state, store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = common::create_test_server(state);

    let response = server.post("/api/shorten").text("{ not json").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request format");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_wrong_field_type() {
    let (state, _store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": 42 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request format");
}

#[tokio::test]
async fn test_shorten_missing_host_without_base_url() {
    let (state, store) = common::create_test_state(None);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());
}
