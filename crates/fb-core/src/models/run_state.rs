use serde::{Deserialize, Serialize};

/// Lifecycle phase of the managed file server.
///
/// Transitions are driven by confirmed remote responses only:
/// `Stopped -> Starting -> Running`, `Running -> Stopping -> Stopped`,
/// `Starting -> Error` when a start fails, and `Stopping -> <previous>`
/// when a stop is not confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    /// Server is not running
    #[default]
    Stopped,
    /// Start call issued, waiting for the remote to confirm
    Starting,
    /// Remote confirmed a live process
    Running,
    /// Stop call issued, waiting for the remote to confirm
    Stopping,
    /// Last start attempt failed
    Error { reason: String },
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Error { .. } => "error",
        }
    }

    /// Whether a lifecycle call is waiting on the remote.
    pub fn is_transitional(&self) -> bool {
        matches!(self, Self::Starting | Self::Stopping)
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            Self::Error { reason } => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error { reason } => write!(f, "error: {reason}"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
