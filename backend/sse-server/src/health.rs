use crate::AppState;

use std::time::SystemTime;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Liveness plus a snapshot of broadcast activity
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "channels": state.registry.group_count().await,
        "subscribers": state.registry.subscriber_count().await,
        "timestamp": humantime::format_rfc3339(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
