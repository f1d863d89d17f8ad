mod busy_guard;
mod controller;
mod snapshot;

pub use controller::LifecycleController;
pub use snapshot::LifecycleSnapshot;

/// Panel messages shown when a lifecycle call fails.
pub(crate) const START_FAILED_MESSAGE: &str = "Failed to start the server";
pub(crate) const STOP_FAILED_MESSAGE: &str = "Failed to close the server";
pub(crate) const STATUS_FAILED_MESSAGE: &str = "Failed to load file browser status";
