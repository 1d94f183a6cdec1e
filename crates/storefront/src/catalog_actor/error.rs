//! Error types for the Catalog actor.

use crate::error::ErrorKind;
use crate::model::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product name must not be empty")]
    EmptyName,

    #[error("Product price must not be negative: {0}")]
    NegativePrice(Decimal),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::EmptyName | CatalogError::NegativePrice(_) => ErrorKind::ValidationFailed,
            CatalogError::ActorCommunicationError(_) => ErrorKind::DependencyUnavailable,
        }
    }
}
