//! Username and password rules.
//!
//! Both credentials end up on the command line of the managed process, so
//! anything a shell would interpret is refused outright.

use crate::ValidationOutcome;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_CREDENTIAL_LENGTH: usize = 4;
pub const MAX_CREDENTIAL_LENGTH: usize = 20;

pub const SHELL_METACHARACTERS: [char; 20] = [
    ';', '&', '|', '>', '<', '`', '\'', '"', '\\', '*', '?', '{', '}', '(', ')', '[', ']', '\n',
    '\r', '$',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for CredentialField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRejection {
    #[error("The fields cannot be empty.")]
    BothEmpty,

    #[error("The {0} field cannot be empty.")]
    Empty(CredentialField),

    #[error("The {0} length can't be less than 4 characters.")]
    TooShort(CredentialField),

    #[error(
        "The {field} cannot have the following characters: ; & | > < ` ' \" \\ * ? {{ }} ( ) [ ] $ or line breaks."
    )]
    ForbiddenCharacter { field: CredentialField, found: char },
}

impl CredentialRejection {
    /// The single field this rejection is about, if any.
    pub fn field(&self) -> Option<CredentialField> {
        match self {
            Self::BothEmpty => None,
            Self::Empty(field) | Self::TooShort(field) => Some(*field),
            Self::ForbiddenCharacter { field, .. } => Some(*field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCheck {
    pub field: CredentialField,
    /// Trimmed, possibly truncated value; what the field should echo
    pub value: String,
    /// Input was longer than the limit and got cut
    pub truncated: bool,
    pub result: Result<(), CredentialRejection>,
}

impl CredentialCheck {
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }

    pub fn outcome(&self) -> ValidationOutcome {
        ValidationOutcome::from_result(&self.result)
    }
}

/// Check one credential as typed by the user.
///
/// Over-long input is silently cut to the limit and the cut value is
/// checked again; it never produces an error on its own.
pub fn check_credential(field: CredentialField, raw: &str) -> CredentialCheck {
    let trimmed = raw.trim();

    if trimmed.chars().count() > MAX_CREDENTIAL_LENGTH {
        let cut: String = trimmed.chars().take(MAX_CREDENTIAL_LENGTH).collect();
        return CredentialCheck {
            truncated: true,
            ..check_credential(field, &cut)
        };
    }

    let result = if trimmed.is_empty() {
        Err(CredentialRejection::Empty(field))
    } else if trimmed.chars().count() < MIN_CREDENTIAL_LENGTH {
        Err(CredentialRejection::TooShort(field))
    } else if let Some(found) = trimmed.chars().find(|c| SHELL_METACHARACTERS.contains(c)) {
        Err(CredentialRejection::ForbiddenCharacter { field, found })
    } else {
        Ok(())
    };

    CredentialCheck {
        field,
        value: trimmed.to_string(),
        truncated: false,
        result,
    }
}

/// Check a username/password pair as a unit.
///
/// Returns the cleaned values only when both pass; the username's problem
/// is reported first.
pub fn check_credential_pair(
    username: &str,
    password: &str,
) -> Result<(String, String), CredentialRejection> {
    if username.trim().is_empty() && password.trim().is_empty() {
        return Err(CredentialRejection::BothEmpty);
    }

    let username = check_credential(CredentialField::Username, username);
    let password = check_credential(CredentialField::Password, password);

    username.result?;
    password.result?;

    Ok((username.value, password.value))
}
