//! Seam to the host's remote-procedure mechanism.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure of the channel itself, as opposed to a reply the manager dislikes.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("remote method failed: {message}")]
    Remote { message: String },
}

impl ChannelError {
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn remote<S: Into<String>>(message: S) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }
}

/// Named request/response calls into the process that owns the file server.
///
/// Implementations map the host transport's own failure reporting (for
/// example a `success: false` envelope) to [`ChannelError`]; a successful
/// call returns the raw result, which may be `null`.
#[async_trait]
pub trait RemoteChannel: Send + Sync {
    async fn call(&self, method: &str, args: Value) -> Result<Value, ChannelError>;
}
