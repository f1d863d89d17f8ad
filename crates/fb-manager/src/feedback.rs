//! Error and success messages of one form field or panel.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Message {
    text: String,
    shown_at: Instant,
}

/// A pair of mutually exclusive messages with optional display windows.
///
/// Expiry is checked on read, so nothing has to run in the background to
/// clear a message.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    error: Option<Message>,
    success: Option<Message>,
    error_window: Option<Duration>,
    success_window: Option<Duration>,
}

impl Feedback {
    pub fn new(error_window: Option<Duration>, success_window: Option<Duration>) -> Self {
        Self {
            error_window,
            success_window,
            ..Self::default()
        }
    }

    /// Field feedback: errors stay until replaced, successes fade.
    pub fn for_field(success_window: Duration) -> Self {
        Self::new(None, Some(success_window))
    }

    /// Panel notices: both kinds fade after the same window.
    pub fn for_panel(window: Duration) -> Self {
        Self::new(Some(window), Some(window))
    }

    pub fn show_error<S: Into<String>>(&mut self, text: S) {
        self.success = None;
        self.error = Message::shown_now(text);
    }

    pub fn show_success<S: Into<String>>(&mut self, text: S) {
        self.error = None;
        self.success = Message::shown_now(text);
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn error(&self) -> Option<&str> {
        visible(self.error.as_ref(), self.error_window)
    }

    pub fn success(&self) -> Option<&str> {
        visible(self.success.as_ref(), self.success_window)
    }

    /// Time left before the visible message disappears, if it fades at all.
    pub fn expires_in(&self) -> Option<Duration> {
        [
            (self.error.as_ref(), self.error_window),
            (self.success.as_ref(), self.success_window),
        ]
        .into_iter()
        .find_map(|(message, window)| {
            let remaining = window?.checked_sub(message?.shown_at.elapsed())?;
            Some(remaining).filter(|remaining| !remaining.is_zero())
        })
    }
}

impl Message {
    fn shown_now<S: Into<String>>(text: S) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            text,
            shown_at: Instant::now(),
        })
    }
}

fn visible(message: Option<&Message>, window: Option<Duration>) -> Option<&str> {
    let message = message?;
    match window {
        Some(window) if message.shown_at.elapsed() >= window => None,
        _ => Some(message.text.as_str()),
    }
}
