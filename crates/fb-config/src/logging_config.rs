use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_CONSOLE, DEFAULT_LOG_DIRECTORY,
    DEFAULT_LOG_FILE_PREFIX, LogLevel,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the host's data directory
    pub directory: String,
    /// Rotated files are named `<prefix>.<date>.log`
    pub file_prefix: String,
    /// Also log to stdout
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            directory: DEFAULT_LOG_DIRECTORY.into(),
            file_prefix: DEFAULT_LOG_FILE_PREFIX.into(),
            console: DEFAULT_LOG_CONSOLE,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.directory.is_empty()
            || Path::new(&self.directory).is_absolute()
            || self.directory.contains("..")
        {
            return Err(ConfigError::logging(
                "logging.directory must be relative and cannot contain '..'",
            ));
        }

        if self.file_prefix.trim().is_empty() {
            return Err(ConfigError::logging("logging.file_prefix cannot be empty"));
        }

        Ok(())
    }
}
