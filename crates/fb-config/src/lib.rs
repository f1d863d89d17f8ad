mod config;
mod error;
mod feedback_config;
mod log_level;
mod logging_config;
mod server_config;
mod timeout_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use feedback_config::FeedbackConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use timeout_config::TimeoutConfig;

const CONFIG_DIR_ENV: &str = "FB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_PORT_SETTING_KEY: &str = "port";
const DEFAULT_USERNAME_SETTING_KEY: &str = "currentUsername";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "logs";
const DEFAULT_LOG_FILE_PREFIX: &str = "fb-manager";
const DEFAULT_LOG_CONSOLE: bool = true;
