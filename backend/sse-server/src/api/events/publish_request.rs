use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Body of `POST /events/{channel}`
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    /// Event id; generated when absent
    pub id: Option<String>,
    /// Event type label
    pub event: Option<String>,
    pub data: String,
    /// Reconnection hint for receivers, in milliseconds
    pub retry_ms: Option<u64>,
}

impl PublishRequest {
    /// Reject single-line fields that would split an event frame
    pub fn validate(&self) -> ApiResult<()> {
        if let Some(ref id) = self.id
            && has_line_break(id)
        {
            return Err(ApiError::validation("id", "id must not contain line breaks"));
        }

        if let Some(ref event) = self.event {
            if event.is_empty() {
                return Err(ApiError::validation("event", "event must not be empty"));
            }
            if has_line_break(event) {
                return Err(ApiError::validation(
                    "event",
                    "event must not contain line breaks",
                ));
            }
        }

        Ok(())
    }
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}
