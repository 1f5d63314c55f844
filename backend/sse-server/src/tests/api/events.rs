use crate::tests::{test_state, wait_for_removal};
use crate::{build_router, subscribe};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use axum_test::TestServer;
use futures::StreamExt;
use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn given_no_channel_when_published_then_404_and_nothing_created() {
    let state = test_state();
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let resp = server
        .post("/events/news")
        .json(&json!({ "data": "hello" }))
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(!state.registry.contains("news").await);
}

#[tokio::test]
async fn given_subscriber_when_published_then_delivered_with_fields() {
    let state = test_state();
    let (subscriber, mut queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let resp = server
        .post("/events/news")
        .json(&json!({ "id": "42", "event": "headline", "data": "a\nb", "retry_ms": 500 }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["channel"], "news");
    assert_eq!(body["id"], "42");
    assert_eq!(body["delivered"], 1);
    assert_eq!(body["timed_out"], 0);
    assert_eq!(body["disconnected"], 0);

    let message = queue.try_recv().unwrap();
    assert_eq!(
        message.to_event_stream(),
        "id: 42\nevent: headline\nretry: 500\ndata: a\ndata: b\n\n"
    );
    let group = state.registry.get("news").await.unwrap();
    assert_eq!(group.last_event_id().await, "42");
}

#[tokio::test]
async fn given_missing_id_when_published_then_uuid_generated() {
    let state = test_state();
    let (subscriber, mut queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let server = TestServer::new(build_router(state)).unwrap();

    let resp = server
        .post("/events/news")
        .json(&json!({ "data": "x" }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    let id = body["id"].as_str().unwrap();
    assert_that!(Uuid::parse_str(id), ok(anything()));
    assert_eq!(queue.try_recv().unwrap().id(), id);
}

#[tokio::test]
async fn given_line_break_in_event_when_published_then_400_with_field() {
    let state = test_state();
    let (subscriber, mut queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let server = TestServer::new(build_router(state)).unwrap();

    let resp = server
        .post("/events/news")
        .json(&json!({ "event": "a\nb", "data": "x" }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "event");
    assert!(queue.try_recv().is_none());
}

#[tokio::test]
async fn given_subscribe_request_when_handled_then_joins_and_streams_retry_first() {
    let state = test_state();

    let response = subscribe(
        State(state.clone()),
        Path("news".to_string()),
        HeaderMap::new(),
    )
    .await
    .unwrap();

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
    assert_that!(state.registry.subscriber_count().await, eq(1));

    let mut body = response.into_body().into_data_stream();
    let first = body.next().await.unwrap().unwrap();
    assert_eq!(&first[..], b"retry: 3000\n\n");

    state
        .registry
        .send("news", sse_broadcast::Message::new("1", "hi"))
        .await;
    let second = body.next().await.unwrap().unwrap();
    assert_eq!(&second[..], b"id: 1\ndata: hi\n\n");

    drop(body);
    assert!(wait_for_removal(&state.registry, "news").await);
}

#[tokio::test]
async fn given_last_event_id_header_when_subscribed_then_still_joins_without_replay() {
    let state = test_state();
    let (subscriber, _queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    state
        .registry
        .send("news", sse_broadcast::Message::new("7", "x"))
        .await;
    let mut headers = HeaderMap::new();
    headers.insert("last-event-id", HeaderValue::from_static("5"));

    let response = subscribe(State(state.clone()), Path("news".to_string()), headers)
        .await
        .unwrap();

    assert_that!(state.registry.subscriber_count().await, eq(2));
    let mut body = response.into_body().into_data_stream();
    assert_eq!(&body.next().await.unwrap().unwrap()[..], b"retry: 3000\n\n");
}
