//! # ActorClient Trait
//!
//! Shared plumbing for domain clients: each wraps a [`ResourceClient`], names
//! its own error type, and inherits `get` and `query`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard read operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Account> for AccountClient {
///     type Error = AccountError;
///
///     fn inner(&self) -> &ResourceClient<Account> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> AccountError {
///         AccountError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get() and query() are now available on AccountClient.
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the record-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Select records with an entity-specific query.
    #[tracing::instrument(skip(self))]
    async fn query(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(query).await.map_err(Self::map_error)
    }
}
