use crate::{ShutdownSignal, StreamConfig};

use std::sync::Arc;

use sse_broadcast::{DeliveryConfig, FanoutStrategy, GroupRegistry, LogSink, Metrics};
use sse_config::{BroadcastConfig, FanoutMode};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: GroupRegistry,
    pub shutdown: ShutdownSignal,
    pub stream: StreamConfig,
}

impl AppState {
    /// Build state from loaded configuration, logging diagnostics through `log`
    pub fn from_config(config: &sse_config::Config) -> Self {
        let registry = GroupRegistry::new(
            delivery_config(&config.broadcast),
            Arc::new(LogSink),
            Metrics::new(),
        );

        Self {
            registry,
            shutdown: ShutdownSignal::new(),
            stream: StreamConfig::from(&config.server),
        }
    }
}

/// Translate file/env broadcast settings into group delivery settings
pub fn delivery_config(config: &BroadcastConfig) -> DeliveryConfig {
    DeliveryConfig {
        delivery_timeout: config.delivery_timeout(),
        queue_capacity: config.queue_capacity,
        fanout: match config.fanout {
            FanoutMode::Concurrent => FanoutStrategy::Concurrent,
            FanoutMode::Sequential => FanoutStrategy::Sequential,
        },
    }
}
