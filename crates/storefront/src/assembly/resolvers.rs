//! Capability traits for the two collaborators the assembly service calls.
//!
//! The in-process clients implement them; tests plug in fakes.

use crate::model::{Account, AccountId, Product, ProductId};
use async_trait::async_trait;
use record_actor::FrameworkError;
use thiserror::Error;

/// Why a collaborator call produced no answer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    /// The collaborator could not be reached, or went away mid-call.
    #[error("dependency unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered with an error.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl From<FrameworkError> for ResolveError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ResolveError::Unavailable(e.to_string())
            }
            FrameworkError::DuplicateId(_) | FrameworkError::EntityError(_) => {
                ResolveError::Rejected(e.to_string())
            }
        }
    }
}

#[async_trait]
pub trait AccountResolver: Send + Sync {
    /// `Ok(None)` is a definite miss.
    async fn resolve_account(&self, id: &AccountId) -> Result<Option<Account>, ResolveError>;
}

#[async_trait]
pub trait ProductResolver: Send + Sync {
    /// One batched lookup. Ids the catalog does not know are absent from the
    /// result rather than an error.
    async fn resolve_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, ResolveError>;
}
