//! Event stream REST API handlers

use crate::{
    ApiError, ApiResult, AppState, MembershipGuard, PublishRequest, PublishResponse, event_stream,
};

use std::time::Duration;

use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use log::{debug, info};
use sse_broadcast::Message;
use uuid::Uuid;

const LAST_EVENT_ID_HEADER: &str = "last-event-id";

/// GET /events/{channel}
pub async fn subscribe(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let (subscriber, queue) = state.registry.subscriber()?;
    let subscriber_id = subscriber.id();

    let group = state.registry.join(&channel, subscriber).await;
    let membership = MembershipGuard::new(state.registry.clone(), channel, subscriber_id);

    if let Some(last_seen) = headers
        .get(LAST_EVENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        let current = group.last_event_id().await;
        if last_seen == current {
            debug!(
                "Subscriber {subscriber_id} resumed {} at latest event {current}",
                membership.channel()
            );
        } else {
            // Only the latest id is remembered, so missed events cannot be replayed.
            info!(
                "Subscriber {subscriber_id} resumed {} from {last_seen}, channel is at {current:?}; events in between are not replayed",
                membership.channel()
            );
        }
    }

    info!(
        "Subscriber {subscriber_id} connected to {}",
        membership.channel()
    );

    let stream = event_stream(
        queue,
        membership,
        state.shutdown.clone(),
        &state.stream,
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

/// POST /events/{channel}
pub async fn publish(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(req): Json<PublishRequest>,
) -> ApiResult<Json<PublishResponse>> {
    req.validate()?;

    let id = req.id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut message = Message::new(id.clone(), req.data);
    if let Some(event) = req.event {
        message = message.with_event(event);
    }
    if let Some(retry_ms) = req.retry_ms {
        message = message.with_retry(Duration::from_millis(retry_ms));
    }

    let report = state
        .registry
        .send(&channel, message)
        .await
        .ok_or_else(|| ApiError::channel_not_found(&channel))?;

    debug!(
        "Published {id} to {channel}: {}/{} delivered",
        report.delivered,
        report.attempted()
    );

    Ok(Json(PublishResponse::new(channel, id, report)))
}
