//! Channel REST API handlers

use crate::{
    ApiError, ApiResult, AppState, ChannelDto, ChannelListResponse, DeleteChannelResponse,
};

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;

/// GET /channels
pub async fn list_channels(State(state): State<AppState>) -> ApiResult<Json<ChannelListResponse>> {
    let mut channels = Vec::new();
    for group in state.registry.groups().await {
        channels.push(ChannelDto::from_group(&group).await);
    }
    channels.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(ChannelListResponse { channels }))
}

/// DELETE /channels/{channel}
///
/// Closes every open stream on the channel.
pub async fn delete_channel(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> ApiResult<Json<DeleteChannelResponse>> {
    if !state.registry.remove(&channel).await {
        return Err(ApiError::channel_not_found(&channel));
    }

    info!("Channel {channel} deleted");

    Ok(Json(DeleteChannelResponse {
        channel,
        deleted: true,
    }))
}
