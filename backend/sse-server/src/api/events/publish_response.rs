use serde::Serialize;
use sse_broadcast::SendReport;

/// Delivery outcome of one publish
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub channel: String,
    pub id: String,
    pub delivered: usize,
    pub timed_out: usize,
    pub disconnected: usize,
}

impl PublishResponse {
    pub fn new(channel: String, id: String, report: SendReport) -> Self {
        Self {
            channel,
            id,
            delivered: report.delivered,
            timed_out: report.timed_out,
            disconnected: report.disconnected,
        }
    }
}
