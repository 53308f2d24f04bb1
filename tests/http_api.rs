//! HTTP API Tests
//!
//! Router-level tests exercising the four transport operations without
//! binding a socket: read current, append, read history, health.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use veridoc::http_server::{HttpServer, HttpServerConfig};
use veridoc::store::RevisionStore;

fn test_server(seed: &str) -> axum::Router {
    let store = Arc::new(RevisionStore::with_seed(seed.as_bytes().to_vec()));
    HttpServer::with_store(HttpServerConfig::default(), store).router()
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_read_current() {
    let router = test_server("Hello World");

    let response = router.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["data"], "Hello World");
    assert_eq!(
        json["digest"],
        "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e"
    );
}

#[tokio::test]
async fn test_append_returns_authoritative_digest() {
    let router = test_server("Hello World");

    let response = router
        .clone()
        .oneshot(post_json("/", r#"{"data": "New Value"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let appended = body_json(response.into_body()).await;
    assert_eq!(appended["data"], "New Value");
    let digest = appended["digest"].as_str().unwrap().to_string();
    assert_eq!(digest.len(), 64);

    // Subsequent read observes the append
    let response = router.oneshot(get("/")).await.unwrap();
    let current = body_json(response.into_body()).await;
    assert_eq!(current["data"], "New Value");
    assert_eq!(current["digest"], digest.as_str());
}

#[tokio::test]
async fn test_history_oldest_first_with_sequences() {
    let router = test_server("A");

    for data in [r#"{"data": "B"}"#, r#"{"data": "C"}"#] {
        let response = router.clone().oneshot(post_json("/", data)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router.oneshot(get("/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    for (i, (entry, data)) in entries.iter().zip(["A", "B", "C"]).enumerate() {
        assert_eq!(entry["data"], data);
        assert_eq!(entry["sequence"], i as u64);
    }
}

#[tokio::test]
async fn test_append_rejects_malformed_body() {
    let router = test_server("Hello World");

    for body in [r#"{"wrong_field": 1}"#, "not json"] {
        let response = router.clone().oneshot(post_json("/", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response.into_body()).await;
        assert_eq!(json["code"], 400);
        assert!(
            !json["error"].as_str().unwrap().is_empty(),
            "rejection must carry a readable error message"
        );
    }

    // Failed appends leave history unchanged
    let response = router.oneshot(get("/history")).await.unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health() {
    let router = test_server("Hello World");

    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}
