//! Integration tests for the live viewer channel

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures_util::StreamExt;
use hexisle_server::{create_router, ServerConfig, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio_tungstenite::connect_async;
use tower::ServiceExt;

/// Serve the router on an ephemeral port; the returned clone shares its state
async fn start_server() -> (String, axum::Router) {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new(30, 30));
    let router = create_router(&config, state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let serve_router = router.clone();
    tokio::spawn(async move {
        axum::serve(listener, serve_router).await.unwrap();
    });

    (format!("ws://{addr}/api/ws"), router)
}

fn join_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/join")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "ada" }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_viewer_gets_snapshot_then_updates() {
    let (url, router) = start_server().await;
    let (mut socket, _) = connect_async(&url).await.unwrap();

    // Full game state arrives as the first message on connect
    let first = socket.next().await.unwrap().unwrap();
    let snapshot: Value = serde_json::from_str(first.to_text().unwrap()).unwrap();
    assert_eq!(snapshot["cols"], 30);
    assert_eq!(snapshot["turn"], 1);
    assert_eq!(snapshot["players"].as_array().unwrap().len(), 0);

    // Every successful mutation pushes a fresh snapshot
    let response = router.oneshot(join_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let update = socket.next().await.unwrap().unwrap();
    let snapshot: Value = serde_json::from_str(update.to_text().unwrap()).unwrap();
    assert_eq!(snapshot["players"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["currentPlayer"], 1);
    assert_eq!(snapshot["units"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_each_viewer_gets_every_update() {
    let (url, router) = start_server().await;
    let (mut first_viewer, _) = connect_async(&url).await.unwrap();
    let (mut second_viewer, _) = connect_async(&url).await.unwrap();
    first_viewer.next().await.unwrap().unwrap();
    second_viewer.next().await.unwrap().unwrap();

    router.oneshot(join_request()).await.unwrap();

    for viewer in [&mut first_viewer, &mut second_viewer] {
        let update = viewer.next().await.unwrap().unwrap();
        let snapshot: Value = serde_json::from_str(update.to_text().unwrap()).unwrap();
        assert_eq!(snapshot["players"].as_array().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_disconnected_viewer_does_not_block_actions() {
    let (url, router) = start_server().await;
    let (mut socket, _) = connect_async(&url).await.unwrap();
    socket.next().await.unwrap().unwrap();
    drop(socket);

    // The departed viewer is evicted; mutations still succeed
    let response = router.clone().oneshot(join_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/endturn")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
