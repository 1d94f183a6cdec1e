//! Error types for the Account actor.

use crate::error::ErrorKind;
use crate::model::AccountId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Account name must not be empty")]
    EmptyName,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::NotFound(_) => ErrorKind::NotFound,
            AccountError::EmptyName => ErrorKind::ValidationFailed,
            AccountError::ActorCommunicationError(_) => ErrorKind::DependencyUnavailable,
        }
    }
}
