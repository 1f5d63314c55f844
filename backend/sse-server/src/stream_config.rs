use std::time::Duration;

/// Per-connection settings for outgoing event streams
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Interval between keep-alive comments while a stream is idle
    pub keep_alive: Duration,
    /// Reconnection hint written as the first frame, if any
    pub retry: Option<Duration>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            keep_alive: Duration::from_secs(15),
            retry: Some(Duration::from_millis(3000)),
        }
    }
}

impl From<&sse_config::ServerConfig> for StreamConfig {
    fn from(config: &sse_config::ServerConfig) -> Self {
        Self {
            keep_alive: Duration::from_secs(config.keep_alive_secs),
            retry: (config.retry_ms > 0).then(|| Duration::from_millis(config.retry_ms)),
        }
    }
}
