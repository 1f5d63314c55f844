use crate::FanoutStrategy;

use std::time::Duration;

/// Default per-subscriber delivery deadline
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Default bound for each subscriber's delivery queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Configuration for delivering messages to group members
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// Maximum wait for queue space before a delivery is abandoned
    pub delivery_timeout: Duration,
    /// Capacity used for subscriber queues created through the registry
    pub queue_capacity: usize,
    pub fanout: FanoutStrategy,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            delivery_timeout: DEFAULT_DELIVERY_TIMEOUT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            fanout: FanoutStrategy::default(),
        }
    }
}
