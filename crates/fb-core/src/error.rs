use crate::{CredentialField, CredentialRejection, PortRejection};

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid port {value}: {reason} {location}")]
    InvalidPort {
        value: String,
        reason: PortRejection,
        location: ErrorLocation,
    },

    #[error("Invalid {field}: {reason} {location}")]
    InvalidCredential {
        field: CredentialField,
        reason: CredentialRejection,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
