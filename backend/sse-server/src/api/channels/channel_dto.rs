use serde::Serialize;
use sse_broadcast::BroadcastGroup;

#[derive(Debug, Serialize)]
pub struct ChannelDto {
    pub name: String,
    pub subscribers: usize,
    /// Empty until the first event is published
    pub last_event_id: String,
}

impl ChannelDto {
    pub async fn from_group(group: &BroadcastGroup) -> Self {
        Self {
            name: group.name().to_string(),
            subscribers: group.member_count().await,
            last_event_id: group.last_event_id().await,
        }
    }
}
