use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_DISPLAY_MS: u64 = 500;
pub const MAX_DISPLAY_MS: u64 = 30_000;
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 3_000;
pub const DEFAULT_NOTICE_DISPLAY_MS: u64 = 4_000;

/// How long transient messages stay visible.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Settings success messages ("Port number saved successfully.")
    pub success_display_ms: u64,
    /// Lifecycle failure notices on the status panel
    pub notice_display_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
            notice_display_ms: DEFAULT_NOTICE_DISPLAY_MS,
        }
    }
}

impl FeedbackConfig {
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn notice_display(&self) -> Duration {
        Duration::from_millis(self.notice_display_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("feedback.success_display_ms", self.success_display_ms),
            ("feedback.notice_display_ms", self.notice_display_ms),
        ] {
            if !(MIN_DISPLAY_MS..=MAX_DISPLAY_MS).contains(&value) {
                return Err(ConfigError::feedback(format!(
                    "{name} must be {MIN_DISPLAY_MS}-{MAX_DISPLAY_MS}, got {value}"
                )));
            }
        }

        Ok(())
    }
}
