use crate::{AppState, delete_channel, health, list_channels, publish, subscribe};

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Event streams and publishing
        .route("/events/{channel}", get(subscribe).post(publish))
        // Channel administration
        .route("/channels", get(list_channels))
        .route("/channels/{channel}", delete(delete_channel))
        .route("/health", get(health::health_check))
        .with_state(state)
        // Browsers open EventSource connections cross-origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
