mod api;

use crate::{AppState, ShutdownSignal, StreamConfig};

use std::sync::Arc;
use std::time::Duration;

use sse_broadcast::{DeliveryConfig, FanoutStrategy, GroupRegistry, Metrics, NoopSink};

pub(crate) fn test_state() -> AppState {
    AppState {
        registry: GroupRegistry::new(
            DeliveryConfig {
                delivery_timeout: Duration::from_millis(50),
                queue_capacity: 4,
                fanout: FanoutStrategy::Concurrent,
            },
            Arc::new(NoopSink),
            Metrics::new(),
        ),
        shutdown: ShutdownSignal::new(),
        stream: StreamConfig {
            keep_alive: Duration::from_secs(15),
            retry: Some(Duration::from_millis(3000)),
        },
    }
}

/// Yield until a spawned leave has emptied `channel`, bounded
pub(crate) async fn wait_for_removal(registry: &GroupRegistry, channel: &str) -> bool {
    for _ in 0..100 {
        if !registry.contains(channel).await {
            return true;
        }
        tokio::task::yield_now().await;
    }
    false
}
