//! Logging setup with file rotation.

use crate::{ManagerError, ManagerResult};

use std::path::{Path, PathBuf};

use fb_config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Install the global subscriber: optional console output plus a daily
/// rotated file under `data_dir/<directory>`, seven files kept.
///
/// `RUST_LOG` wins over the configured level.
pub fn setup_logging(data_dir: &Path, config: &LoggingConfig) -> ManagerResult<()> {
    let logs_dir = data_dir.join(&config.directory);
    std::fs::create_dir_all(&logs_dir).map_err(|e| {
        ManagerError::logging(format!("cannot create {}: {e}", logs_dir.display()))
    })?;

    let console_layer = config.console.then(|| {
        fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(true)
    });

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(7)
        .filename_prefix(config.file_prefix.as_str())
        .filename_suffix("log")
        .build(&logs_dir)
        .map_err(|e| ManagerError::logging(e.to_string()))?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ManagerError::logging(e.to_string()))
}

/// Path of today's log file.
pub fn current_log_path(data_dir: &Path, config: &LoggingConfig) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    data_dir
        .join(&config.directory)
        .join(format!("{}.{}.log", config.file_prefix, today))
}
