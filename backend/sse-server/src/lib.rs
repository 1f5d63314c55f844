pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown_signal;
pub mod stream_config;

#[cfg(test)]
mod tests;

pub use api::{
    channels::{
        channel_dto::ChannelDto,
        channel_list_response::ChannelListResponse,
        channels::{delete_channel, list_channels},
        delete_channel_response::DeleteChannelResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    events::{
        event_stream::{KEEP_ALIVE_FRAME, event_stream},
        events::{publish, subscribe},
        membership_guard::MembershipGuard,
        publish_request::PublishRequest,
        publish_response::PublishResponse,
    },
};
pub use app_state::{AppState, delivery_config};
pub use error::{Result as ServerResult, ServerError};
pub use shutdown_signal::ShutdownSignal;
pub use stream_config::StreamConfig;

pub use crate::routes::build_router;
