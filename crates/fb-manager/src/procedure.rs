use std::time::Duration;

use fb_config::TimeoutConfig;

/// Remote procedures the manager is allowed to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Status,
    Start,
    Stop,
    GetSetting,
    SaveSetting,
    SaveCredentials,
    LogInfo,
    LogError,
}

/// Timeout class of a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallCategory {
    Query,
    Lifecycle,
    Settings,
    Diagnostic,
}

impl Procedure {
    /// Method name exposed by the remote side.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Status => "getFileBrowserStatus",
            Self::Start => "startFileBrowser",
            Self::Stop => "stopFileBrowser",
            Self::GetSetting => "get_setting",
            Self::SaveSetting => "save_user_settings",
            Self::SaveCredentials => "save_username_password",
            Self::LogInfo => "logInfo",
            Self::LogError => "logError",
        }
    }

    pub fn category(&self) -> CallCategory {
        match self {
            Self::Status => CallCategory::Query,
            Self::Start | Self::Stop => CallCategory::Lifecycle,
            Self::GetSetting | Self::SaveSetting | Self::SaveCredentials => {
                CallCategory::Settings
            }
            Self::LogInfo | Self::LogError => CallCategory::Diagnostic,
        }
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

impl CallCategory {
    pub fn timeout(&self, timeouts: &TimeoutConfig) -> Duration {
        match self {
            Self::Query => timeouts.status(),
            Self::Lifecycle => timeouts.lifecycle(),
            Self::Settings => timeouts.settings(),
            Self::Diagnostic => timeouts.diagnostic(),
        }
    }
}
