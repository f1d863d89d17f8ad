use crate::{
    CoreError, CredentialField, DEFAULT_PORT, Result as CoreErrorResult, accept_port,
    check_credential, check_credential_pair,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const REDACTED: &str = "********";

/// Last accepted configuration of the file server.
///
/// The settings store only changes values through the `with_*` constructors,
/// which run the same rules as the interactive validators. Empty credentials mean "not set yet".
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl ServerSettings {
    #[track_caller]
    pub fn with_port(&self, port: i64) -> CoreErrorResult<Self> {
        let port = accept_port(port).map_err(|reason| CoreError::InvalidPort {
            value: port.to_string(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            port,
            ..self.clone()
        })
    }

    /// Accept a username on its own (used when bootstrapping from the store).
    #[track_caller]
    pub fn with_username(&self, username: &str) -> CoreErrorResult<Self> {
        let check = check_credential(CredentialField::Username, username);
        match check.result {
            Ok(()) => Ok(Self {
                username: check.value,
                ..self.clone()
            }),
            Err(reason) => Err(CoreError::InvalidCredential {
                field: CredentialField::Username,
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    pub fn with_credentials(&self, username: &str, password: &str) -> CoreErrorResult<Self> {
        let (username, password) =
            check_credential_pair(username, password).map_err(|reason| {
                CoreError::InvalidCredential {
                    field: reason.field().unwrap_or(CredentialField::Username),
                    reason,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(Self {
            port: self.port,
            username,
            password,
        })
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
        }
    }
}

impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("port", &self.port)
            .field("username", &self.username)
            .field(
                "password",
                &if self.password.is_empty() { "" } else { REDACTED },
            )
            .finish()
    }
}
