use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteChannelResponse {
    pub channel: String,
    pub deleted: bool,
}
