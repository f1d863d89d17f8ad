use crate::{ChannelError, Procedure};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Remote call {procedure} failed: {source} {location}")]
    Channel {
        procedure: Procedure,
        #[source]
        source: ChannelError,
        location: ErrorLocation,
    },

    #[error("Remote call {procedure} timed out after {timeout_ms}ms {location}")]
    Timeout {
        procedure: Procedure,
        timeout_ms: u128,
        location: ErrorLocation,
    },

    #[error("Unexpected reply from {procedure}: {message} {location}")]
    Protocol {
        procedure: Procedure,
        message: String,
        location: ErrorLocation,
    },

    #[error("Server refused to start: {output} {location}")]
    StartRejected {
        output: String,
        location: ErrorLocation,
    },

    #[error("Server start returned status '{status}' {location}")]
    StartFailed {
        status: String,
        location: ErrorLocation,
    },

    #[error("Server reported online but no live process was found {location}")]
    StartUnconfirmed { location: ErrorLocation },

    #[error("Server stop returned status '{status}': {output} {location}")]
    StopFailed {
        status: String,
        output: String,
        location: ErrorLocation,
    },

    #[error("Result of {procedure} discarded, a newer lifecycle call was issued {location}")]
    Superseded {
        procedure: Procedure,
        location: ErrorLocation,
    },

    #[error("Invalid {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote side did not store the {what} {location}")]
    SaveRejected {
        what: &'static str,
        location: ErrorLocation,
    },

    #[error("Logging setup failed: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },
}

impl ManagerError {
    #[track_caller]
    pub fn channel(procedure: Procedure, source: ChannelError) -> Self {
        Self::Channel {
            procedure,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(procedure: Procedure, after: Duration) -> Self {
        Self::Timeout {
            procedure,
            timeout_ms: after.as_millis(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn protocol<S: Into<String>>(procedure: Procedure, message: S) -> Self {
        Self::Protocol {
            procedure,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn superseded(procedure: Procedure) -> Self {
        Self::Superseded {
            procedure,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn save_rejected(what: &'static str) -> Self {
        Self::SaveRejected {
            what,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether repeating the same action may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Channel {
                source: ChannelError::Transport { .. },
                ..
            } | Self::Timeout { .. }
                | Self::Superseded { .. }
        )
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Channel { .. } | Self::Timeout { .. } => {
                "The plugin backend did not answer. \
                   Try again, or restart the plugin if the problem persists."
            }
            Self::StartRejected { .. } | Self::StartFailed { .. } | Self::StartUnconfirmed { .. } => {
                "The file server could not be started. \
                   Check that the port is free and look at the plugin logs."
            }
            Self::StopFailed { .. } => {
                "The file server could not be stopped. \
                   Refresh the status and try again."
            }
            Self::Superseded { .. } => "Another action replaced this one. No action needed.",
            Self::Validation { .. } => "Correct the highlighted field and save again.",
            Self::SaveRejected { .. } => {
                "The setting was not stored. \
                   Check the plugin logs for more details."
            }
            _ => "An unexpected error occurred. Please check the logs for details.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ManagerError>;
