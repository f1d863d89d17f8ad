pub(crate) mod client;
pub(crate) mod reply;

pub use client::ControlClient;
pub use reply::{StartReply, StatusReply, StopReply};
