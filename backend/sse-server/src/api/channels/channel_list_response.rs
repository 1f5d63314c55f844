use crate::ChannelDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChannelListResponse {
    pub channels: Vec<ChannelDto>,
}
