use crate::SendReport;

use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics collector for broadcast operations
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "sse_broadcast",
        }
    }

    /// Record a subscriber joining a group
    pub fn subscriber_joined(&self) {
        counter!(format!("{}.subscribers.joined", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).increment(1.0);
    }

    /// Record subscribers leaving a group (single leave or group close)
    pub fn subscribers_left(&self, count: usize) {
        counter!(format!("{}.subscribers.left", self.prefix)).increment(count as u64);
        gauge!(format!("{}.subscribers.active", self.prefix)).decrement(count as f64);
    }

    /// Record a message published to a group
    pub fn message_published(&self, message_type: &str) {
        counter!(format!("{}.messages.published", self.prefix)).increment(1);
        counter!(format!(
            "{}.messages.published.{}",
            self.prefix, message_type
        ))
        .increment(1);
    }

    /// Record the outcome of one send to `group`
    pub fn send_completed(&self, group: &str, report: &SendReport, elapsed: Duration) {
        let group = group.to_string();
        counter!(format!("{}.deliveries.ok", self.prefix), "group" => group.clone())
            .increment(report.delivered as u64);
        counter!(format!("{}.deliveries.timeout", self.prefix), "group" => group.clone())
            .increment(report.timed_out as u64);
        counter!(format!("{}.deliveries.disconnected", self.prefix), "group" => group.clone())
            .increment(report.disconnected as u64);
        histogram!(format!("{}.send.latency_ms", self.prefix), "group" => group)
            .record(elapsed.as_secs_f64() * 1000.0);
    }

    /// Record a group being created or removed from a registry
    pub fn group_changed(&self, action: &str) {
        counter!(format!("{}.groups.{}", self.prefix, action)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
