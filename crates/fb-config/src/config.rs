use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    FeedbackConfig, LoggingConfig, ServerConfig, TimeoutConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub timeouts: TimeoutConfig,
    pub feedback: FeedbackConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FB_CONFIG_DIR env var, else use ./.fb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FB_CONFIG_DIR env var > ./.fb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.timeouts.validate()?;
        self.feedback.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: default port {} (keys: {}, {})",
            self.server.default_port,
            self.server.port_setting_key,
            self.server.username_setting_key
        );
        info!(
            "  timeouts: status={}s, lifecycle={}s, settings={}s, diagnostic={}s",
            self.timeouts.status_secs,
            self.timeouts.lifecycle_secs,
            self.timeouts.settings_secs,
            self.timeouts.diagnostic_secs
        );
        info!(
            "  feedback: success={}ms, notice={}ms",
            self.feedback.success_display_ms, self.feedback.notice_display_ms
        );
        info!(
            "  logging: {} in {} (console: {})",
            self.logging.level.directive(),
            self.logging.directory,
            self.logging.console
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_parse("FB_DEFAULT_PORT", &mut self.server.default_port);
        Self::apply_env_string("FB_PORT_SETTING_KEY", &mut self.server.port_setting_key);
        Self::apply_env_string(
            "FB_USERNAME_SETTING_KEY",
            &mut self.server.username_setting_key,
        );

        // Timeouts
        Self::apply_env_parse("FB_STATUS_TIMEOUT_SECS", &mut self.timeouts.status_secs);
        Self::apply_env_parse(
            "FB_LIFECYCLE_TIMEOUT_SECS",
            &mut self.timeouts.lifecycle_secs,
        );
        Self::apply_env_parse("FB_SETTINGS_TIMEOUT_SECS", &mut self.timeouts.settings_secs);
        Self::apply_env_parse(
            "FB_DIAGNOSTIC_TIMEOUT_SECS",
            &mut self.timeouts.diagnostic_secs,
        );

        // Feedback
        Self::apply_env_parse(
            "FB_SUCCESS_DISPLAY_MS",
            &mut self.feedback.success_display_ms,
        );
        Self::apply_env_parse("FB_NOTICE_DISPLAY_MS", &mut self.feedback.notice_display_ms);

        // Logging
        Self::apply_env_parse("FB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("FB_LOG_DIRECTORY", &mut self.logging.directory);
        Self::apply_env_bool("FB_LOG_CONSOLE", &mut self.logging.console);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }
}
