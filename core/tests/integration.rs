//! End-to-end tests against live HTTP servers on ephemeral ports.
//!
//! # Design
//! The happy paths run against the mock-server crate, which mirrors the
//! real service's routes and payload shapes. The content-negotiation and
//! error-normalization branches use single-route axum apps defined inline,
//! so each test controls the exact status, body, and content type on the
//! wire.

use axum::{http::StatusCode, routing::get, Router};
use rag_core::{ApiError, ApiResponse, QueryRequest, RagClient, DEFAULT_COLLECTION};

/// Start the mock retrieval service on an ephemeral port.
async fn spawn_mock() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

/// Start an arbitrary router on an ephemeral port.
async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_round_trip() {
    let base = spawn_mock().await;
    let client = RagClient::new(&base);

    let resp = client.health().await.unwrap();
    let body = resp.as_json().expect("health should be JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ingest_then_query_round_trip() {
    let base = spawn_mock().await;
    let client = RagClient::new(&base);

    let resp = client.ingest(DEFAULT_COLLECTION).await.unwrap();
    let ack = resp.as_json().expect("ingest ack should be JSON");
    assert_eq!(ack["collection"], "docs");
    assert!(ack["files"].as_u64().unwrap() > 0);
    assert!(ack["chunks"].as_u64().unwrap() > 0);

    let resp = client
        .query(&QueryRequest::new("borrow checker"))
        .await
        .unwrap();
    let result = resp.as_json().expect("query result should be JSON");
    assert!(!result["answer"].as_str().unwrap().is_empty());
    let contexts = result["contexts"].as_array().unwrap();
    assert!(!contexts.is_empty());
    assert!(contexts.len() <= 4);
    assert!(contexts[0].as_str().unwrap().contains("borrow checker"));
}

#[tokio::test]
async fn collection_name_with_space_round_trips() {
    let base = spawn_mock().await;
    let client = RagClient::new(&base);

    // "my coll" goes out as my%20coll; the server acks the decoded name.
    let resp = client.ingest("my coll").await.unwrap();
    let ack = resp.as_json().unwrap();
    assert_eq!(ack["collection"], "my coll");

    let input = QueryRequest {
        collection: "my coll".to_string(),
        ..QueryRequest::new("rust")
    };
    let resp = client.query(&input).await.unwrap();
    assert!(resp.as_json().is_some());
}

#[tokio::test]
async fn query_without_ingest_is_status_error() {
    let base = spawn_mock().await;
    let client = RagClient::new(&base);

    let err = client
        .query(&QueryRequest::new("anything"))
        .await
        .unwrap_err();
    match &err {
        ApiError::Status {
            status,
            reason,
            body,
        } => {
            assert_eq!(*status, 500);
            assert_eq!(reason, "Internal Server Error");
            assert_eq!(body, "unknown collection: docs");
        }
        other => panic!("expected Status error, got: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "500 Internal Server Error unknown collection: docs"
    );
}

#[tokio::test]
async fn plain_text_response_returned_verbatim() {
    let app = Router::new().route("/health", get(|| async { "ok" }));
    let base = spawn_app(app).await;
    let client = RagClient::new(&base);

    let resp = client.health().await.unwrap();
    assert_eq!(resp, ApiResponse::Text("ok".to_string()));
}

#[tokio::test]
async fn failure_message_carries_status_reason_and_body() {
    let app = Router::new()
        .route("/health", get(|| async { (StatusCode::NOT_FOUND, "missing") }));
    let base = spawn_app(app).await;
    let client = RagClient::new(&base);

    let err = client.health().await.unwrap_err();
    assert_eq!(err.to_string(), "404 Not Found missing");
}

#[tokio::test]
async fn failure_with_empty_body_still_reports_status() {
    let app = Router::new().route("/health", get(|| async { StatusCode::BAD_GATEWAY }));
    let base = spawn_app(app).await;
    let client = RagClient::new(&base);

    let err = client.health().await.unwrap_err();
    match err {
        ApiError::Status {
            status,
            reason,
            body,
        } => {
            assert_eq!(status, 502);
            assert_eq!(reason, "Bad Gateway");
            assert!(body.is_empty());
        }
        other => panic!("expected Status error, got: {other}"),
    }
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind then drop, so the port is (almost certainly) closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RagClient::new(&format!("http://{addr}"));
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
