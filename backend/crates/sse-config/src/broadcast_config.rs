use crate::{ConfigError, ConfigErrorResult, FanoutMode};

use std::time::Duration;

use serde::Deserialize;

// Delivery timeout constraints (milliseconds)
pub const MIN_DELIVERY_TIMEOUT_MS: u64 = 10;
pub const MAX_DELIVERY_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_DELIVERY_TIMEOUT_MS: u64 = 2_000;

// Subscriber queue capacity constraints
pub const MIN_QUEUE_CAPACITY: usize = 1;
pub const MAX_QUEUE_CAPACITY: usize = 10_000;
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Broadcast delivery settings.
/// All values validated to be within reasonable operational ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Per-subscriber delivery deadline in milliseconds
    pub delivery_timeout_ms: u64,
    /// Bound of each subscriber's delivery queue
    pub queue_capacity: usize,
    pub fanout: FanoutMode,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            delivery_timeout_ms: DEFAULT_DELIVERY_TIMEOUT_MS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            fanout: FanoutMode::default(),
        }
    }
}

impl BroadcastConfig {
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_timeout_ms)
    }

    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.delivery_timeout_ms < MIN_DELIVERY_TIMEOUT_MS
            || self.delivery_timeout_ms > MAX_DELIVERY_TIMEOUT_MS
        {
            return Err(ConfigError::invalid(
                "broadcast.delivery_timeout_ms",
                format!(
                    "must be {}-{}, got {}",
                    MIN_DELIVERY_TIMEOUT_MS, MAX_DELIVERY_TIMEOUT_MS, self.delivery_timeout_ms
                ),
            ));
        }

        if self.queue_capacity < MIN_QUEUE_CAPACITY || self.queue_capacity > MAX_QUEUE_CAPACITY {
            return Err(ConfigError::invalid(
                "broadcast.queue_capacity",
                format!(
                    "must be {}-{}, got {}",
                    MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY, self.queue_capacity
                ),
            ));
        }

        Ok(())
    }
}
