pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::run_state::RunState;
pub use models::server_runtime_state::{ServerRuntimeState, StatusReport};
pub use models::server_settings::ServerSettings;
pub use models::validation_outcome::ValidationOutcome;
pub use validation::credential::{
    CredentialCheck, CredentialField, CredentialRejection, MAX_CREDENTIAL_LENGTH,
    MIN_CREDENTIAL_LENGTH, SHELL_METACHARACTERS, check_credential, check_credential_pair,
};
pub use validation::port::{
    MAX_PORT, MAX_PORT_INPUT_LENGTH, MIN_PORT, PortCheck, PortRejection, RESERVED_PORT,
    accept_port, check_port,
};

/// Port the managed server listens on until a status query or the settings say otherwise.
pub const DEFAULT_PORT: u16 = 8082;
