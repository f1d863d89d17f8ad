//! Lifecycle and settings manager for a remotely controlled file server.
//!
//! The host UI owns a [`FileBrowserManager`] and drives it from user events;
//! every remote effect goes through a host-provided [`RemoteChannel`].

mod channel;
mod client;
mod error;
mod feedback;
mod lifecycle;
pub mod logging;
mod manager;
mod procedure;
mod settings;

#[cfg(test)]
mod tests;

pub use channel::{ChannelError, RemoteChannel};
pub use client::{ControlClient, StartReply, StatusReply, StopReply};
pub use error::{ManagerError, Result as ManagerResult};
pub use feedback::Feedback;
pub use lifecycle::{LifecycleController, LifecycleSnapshot};
pub use manager::FileBrowserManager;
pub use procedure::{CallCategory, Procedure};
pub use settings::{FieldDraft, SettingsStore};

/// Prefix for messages forwarded to the host's log.
const DIAGNOSTIC_PREFIX: &str = "fb-manager: ";
