mod broadcast_config;
mod config;
mod error;
mod fanout_mode;
mod log_level;
mod logging_config;
mod server_config;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use fanout_mode::FanoutMode;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;
const MIN_KEEP_ALIVE_SECS: u64 = 1;
const MAX_KEEP_ALIVE_SECS: u64 = 300;
const DEFAULT_RETRY_MS: u64 = 3000;
const MAX_RETRY_MS: u64 = 600_000;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "SSE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sse";
const CONFIG_FILE_NAME: &str = "config.toml";
