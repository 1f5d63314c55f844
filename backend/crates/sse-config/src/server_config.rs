use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_KEEP_ALIVE_SECS, DEFAULT_PORT,
    DEFAULT_RETRY_MS, MAX_KEEP_ALIVE_SECS, MAX_RETRY_MS, MIN_KEEP_ALIVE_SECS, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Interval between keep-alive comments on idle event streams
    pub keep_alive_secs: u64,
    /// Reconnection hint sent to clients when a stream opens (0 = none)
    pub retry_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
            retry_ms: DEFAULT_RETRY_MS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick a free port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::invalid(
                "server.port",
                format!("must be 0 (auto) or >= {}, got {}", MIN_PORT, self.port),
            ));
        }

        if self.keep_alive_secs < MIN_KEEP_ALIVE_SECS || self.keep_alive_secs > MAX_KEEP_ALIVE_SECS
        {
            return Err(ConfigError::invalid(
                "server.keep_alive_secs",
                format!(
                    "must be {}-{}, got {}",
                    MIN_KEEP_ALIVE_SECS, MAX_KEEP_ALIVE_SECS, self.keep_alive_secs
                ),
            ));
        }

        if self.retry_ms > MAX_RETRY_MS {
            return Err(ConfigError::invalid(
                "server.retry_ms",
                format!("must be at most {}, got {}", MAX_RETRY_MS, self.retry_ms),
            ));
        }

        Ok(())
    }
}
