use std::fmt::Display;

use serde::Serialize;

/// Per-field validation result shown next to an input.
///
/// The default value is a pending field: not accepted, nothing to say yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationOutcome {
    pub accepted: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            message: String::new(),
        }
    }

    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self {
            accepted: false,
            message: message.into(),
        }
    }

    pub fn from_result<T, E: Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::accepted(),
            Err(e) => Self::rejected(e.to_string()),
        }
    }
}
