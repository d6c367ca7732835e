//! Error type for greeter client operations.

use thiserror::Error;

pub type GreeterResult<T> = Result<T, GreeterError>;

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid {field}: {reason}")]
    InvalidAddress { field: String, reason: String },

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("address derivation failed: {0}")]
    Derivation(String),

    #[error("rpc request failed: {0}")]
    Rpc(String),

    #[error("invalid greeting account data: {0}")]
    AccountData(String),
}

impl GreeterError {
    pub fn invalid_secret_key(msg: impl Into<String>) -> Self {
        Self::InvalidSecretKey(msg.into())
    }

    pub fn invalid_address(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress { field: field.into(), reason: reason.into() }
    }

    pub fn rpc(msg: impl Into<String>) -> Self {
        Self::Rpc(msg.into())
    }
}

impl From<solana_client::client_error::ClientError> for GreeterError {
    fn from(error: solana_client::client_error::ClientError) -> Self {
        GreeterError::Rpc(error.to_string())
    }
}

impl From<solana_program::pubkey::PubkeyError> for GreeterError {
    fn from(error: solana_program::pubkey::PubkeyError) -> Self {
        GreeterError::Derivation(error.to_string())
    }
}
