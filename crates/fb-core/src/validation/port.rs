//! Listening port rules.
//!
//! Checks run in a fixed order: empty, length, numeric, reserved, range.
//! The first failing rule decides the message.

use crate::ValidationOutcome;

use thiserror::Error;

/// Port used by the plugin host itself.
pub const RESERVED_PORT: u16 = 1337;
/// Lowest port the managed process may bind without elevated privileges.
pub const MIN_PORT: u16 = 1025;
pub const MAX_PORT: u16 = 65535;
/// Longer input is cut before any other check.
pub const MAX_PORT_INPUT_LENGTH: usize = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRejection {
    #[error("The field cannot be empty.")]
    Empty,

    #[error("The port number must be numeric.")]
    NotNumeric,

    #[error("The port number 1337 cannot be used because it is already used by the plugin host.")]
    Reserved,

    #[error("The port number must be higher than 1024.")]
    TooLow,

    #[error("The port number must be lower than 65536.")]
    TooHigh,
}

/// Result of checking raw port input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortCheck {
    /// Input after truncation, echoed back to the field
    pub input: String,
    pub result: Result<u16, PortRejection>,
}

impl PortCheck {
    pub fn port(&self) -> Option<u16> {
        self.result.ok()
    }

    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }

    pub fn outcome(&self) -> ValidationOutcome {
        ValidationOutcome::from_result(&self.result)
    }
}

/// Check raw port input as typed by the user.
pub fn check_port(raw: &str) -> PortCheck {
    if raw.is_empty() {
        return PortCheck {
            input: String::new(),
            result: Err(PortRejection::Empty),
        };
    }

    let input: String = raw.chars().take(MAX_PORT_INPUT_LENGTH).collect();
    let result = parse_port(&input);

    PortCheck { input, result }
}

/// Check a numeric port value (already parsed, e.g. from a stored setting).
pub fn accept_port(value: i64) -> Result<u16, PortRejection> {
    if value == i64::from(RESERVED_PORT) {
        return Err(PortRejection::Reserved);
    }
    if value < i64::from(MIN_PORT) {
        return Err(PortRejection::TooLow);
    }
    if value > i64::from(MAX_PORT) {
        return Err(PortRejection::TooHigh);
    }

    u16::try_from(value).map_err(|_| PortRejection::TooHigh)
}

fn parse_port(input: &str) -> Result<u16, PortRejection> {
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(PortRejection::NotNumeric);
    }

    // At most five digits, always fits.
    let value: i64 = input.parse().map_err(|_| PortRejection::NotNumeric)?;
    accept_port(value)
}
