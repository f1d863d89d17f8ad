use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Timeout constraints (seconds)
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_STATUS_TIMEOUT_SECS: u64 = 60;
pub const MAX_LIFECYCLE_TIMEOUT_SECS: u64 = 300;
pub const MAX_SETTINGS_TIMEOUT_SECS: u64 = 60;
pub const MAX_DIAGNOSTIC_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LIFECYCLE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SETTINGS_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DIAGNOSTIC_TIMEOUT_SECS: u64 = 2;

/// Upper bound for each category of remote call.
///
/// A call that does not answer in time is treated like a transport failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Status query
    pub status_secs: u64,
    /// Start and stop
    pub lifecycle_secs: u64,
    /// Get/save setting and save credentials
    pub settings_secs: u64,
    /// Diagnostic log forwarding
    pub diagnostic_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            status_secs: DEFAULT_STATUS_TIMEOUT_SECS,
            lifecycle_secs: DEFAULT_LIFECYCLE_TIMEOUT_SECS,
            settings_secs: DEFAULT_SETTINGS_TIMEOUT_SECS,
            diagnostic_secs: DEFAULT_DIAGNOSTIC_TIMEOUT_SECS,
        }
    }
}

impl TimeoutConfig {
    pub fn status(&self) -> Duration {
        Duration::from_secs(self.status_secs)
    }

    pub fn lifecycle(&self) -> Duration {
        Duration::from_secs(self.lifecycle_secs)
    }

    pub fn settings(&self) -> Duration {
        Duration::from_secs(self.settings_secs)
    }

    pub fn diagnostic(&self) -> Duration {
        Duration::from_secs(self.diagnostic_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range("timeouts.status_secs", self.status_secs, MAX_STATUS_TIMEOUT_SECS)?;
        Self::check_range(
            "timeouts.lifecycle_secs",
            self.lifecycle_secs,
            MAX_LIFECYCLE_TIMEOUT_SECS,
        )?;
        Self::check_range(
            "timeouts.settings_secs",
            self.settings_secs,
            MAX_SETTINGS_TIMEOUT_SECS,
        )?;
        Self::check_range(
            "timeouts.diagnostic_secs",
            self.diagnostic_secs,
            MAX_DIAGNOSTIC_TIMEOUT_SECS,
        )?;

        if self.status_secs > self.lifecycle_secs {
            return Err(ConfigError::timeout(format!(
                "timeouts.status_secs ({}) cannot exceed timeouts.lifecycle_secs ({})",
                self.status_secs, self.lifecycle_secs
            )));
        }

        Ok(())
    }

    fn check_range(name: &str, value: u64, max: u64) -> ConfigErrorResult<()> {
        if !(MIN_TIMEOUT_SECS..=max).contains(&value) {
            return Err(ConfigError::timeout(format!(
                "{name} must be {MIN_TIMEOUT_SECS}-{max}, got {value}"
            )));
        }
        Ok(())
    }
}
