use crate::build_router;
use crate::tests::test_state;

use axum::http::StatusCode;
use axum_test::TestServer;
use googletest::prelude::*;
use sse_broadcast::Message;

#[tokio::test]
async fn given_channels_when_listed_then_sorted_with_counts_and_last_ids() {
    let state = test_state();
    let mut queues = Vec::new();
    for channel in ["sports", "news", "news"] {
        let (subscriber, queue) = state.registry.subscriber().unwrap();
        state.registry.join(channel, subscriber).await;
        queues.push(queue);
    }
    state.registry.send("news", Message::new("n1", "x")).await;
    let server = TestServer::new(build_router(state)).unwrap();

    let resp = server.get("/channels").await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    let channels = body["channels"].as_array().unwrap();
    assert_that!(channels.len(), eq(2));
    assert_eq!(channels[0]["name"], "news");
    assert_eq!(channels[0]["subscribers"], 2);
    assert_eq!(channels[0]["last_event_id"], "n1");
    assert_eq!(channels[1]["name"], "sports");
    assert_eq!(channels[1]["subscribers"], 1);
    assert_eq!(channels[1]["last_event_id"], "");
}

#[tokio::test]
async fn given_channel_when_deleted_then_streams_closed_and_channel_gone() {
    let state = test_state();
    let (subscriber, mut queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let resp = server.delete("/channels/news").await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["channel"], "news");
    assert_eq!(body["deleted"], true);
    assert!(!queue.is_open());
    assert!(queue.recv().await.is_none());
    assert!(!state.registry.contains("news").await);
}

#[tokio::test]
async fn given_unknown_channel_when_deleted_then_404() {
    let server = TestServer::new(build_router(test_state())).unwrap();

    let resp = server.delete("/channels/missing").await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_subscribers_when_health_checked_then_reports_counts() {
    let state = test_state();
    let (subscriber, _queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let server = TestServer::new(build_router(state)).unwrap();

    let resp = server.get("/health").await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["channels"], 1);
    assert_eq!(body["subscribers"], 1);
}
