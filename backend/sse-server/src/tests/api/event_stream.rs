use crate::tests::{test_state, wait_for_removal};
use crate::{KEEP_ALIVE_FRAME, MembershipGuard, StreamConfig, event_stream};

use std::time::Duration;

use futures::{Stream, StreamExt};
use googletest::prelude::*;
use sse_broadcast::Message;

fn open_stream(
    state: &crate::AppState,
    channel: &str,
    queue: sse_broadcast::SubscriberQueue,
    config: &StreamConfig,
) -> impl Stream<Item = Result<String, std::convert::Infallible>> + use<> {
    let membership =
        MembershipGuard::new(state.registry.clone(), channel.to_string(), queue.id());
    event_stream(queue, membership, state.shutdown.clone(), config)
}

#[tokio::test]
async fn given_retry_hint_when_streamed_then_retry_precedes_messages() {
    let state = test_state();
    let (subscriber, queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let mut stream = Box::pin(open_stream(&state, "news", queue, &state.stream));

    assert_eq!(stream.next().await.unwrap().unwrap(), "retry: 3000\n\n");

    state
        .registry
        .send("news", Message::new("1", "hi").with_event("greeting"))
        .await;
    assert_eq!(
        stream.next().await.unwrap().unwrap(),
        "id: 1\nevent: greeting\ndata: hi\n\n"
    );
}

#[tokio::test(start_paused = true)]
async fn given_idle_stream_when_keep_alive_elapses_then_comment_frame() {
    let state = test_state();
    let (subscriber, queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let config = StreamConfig {
        keep_alive: Duration::from_secs(15),
        retry: None,
    };
    let mut stream = Box::pin(open_stream(&state, "news", queue, &config));

    let started = tokio::time::Instant::now();
    assert_eq!(stream.next().await.unwrap().unwrap(), KEEP_ALIVE_FRAME);
    assert!(started.elapsed() >= Duration::from_secs(15));
}

#[tokio::test]
async fn given_shutdown_when_streaming_then_stream_ends() {
    let state = test_state();
    let (subscriber, queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let mut stream = Box::pin(open_stream(&state, "news", queue, &state.stream));
    stream.next().await;

    state.shutdown.trigger();

    assert_that!(stream.next().await, none());
}

#[tokio::test]
async fn given_shutdown_already_triggered_when_stream_opened_then_ends_after_retry_hint() {
    let state = test_state();
    let (subscriber, queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    state.shutdown.trigger();
    assert!(state.shutdown.is_triggered());

    let mut stream = Box::pin(open_stream(&state, "news", queue, &state.stream));

    assert_eq!(stream.next().await.unwrap().unwrap(), "retry: 3000\n\n");
    assert_that!(stream.next().await, none());
}

#[tokio::test]
async fn given_channel_removed_when_streaming_then_stream_ends() {
    let state = test_state();
    let (subscriber, queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let mut stream = Box::pin(open_stream(&state, "news", queue, &state.stream));
    stream.next().await;

    state.registry.remove("news").await;

    assert_that!(stream.next().await, none());
}

#[tokio::test]
async fn given_open_stream_when_dropped_then_subscriber_leaves_channel() {
    let state = test_state();
    let (subscriber, queue) = state.registry.subscriber().unwrap();
    state.registry.join("news", subscriber).await;
    let stream = open_stream(&state, "news", queue, &state.stream);
    assert_that!(state.registry.subscriber_count().await, eq(1));

    drop(stream);

    assert!(wait_for_removal(&state.registry, "news").await);
}
