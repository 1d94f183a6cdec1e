//! # Account Client
//!
//! Wraps a `ResourceClient<Account>` with account-specific calls, and acts as
//! the [`AccountResolver`] for order placement.

use crate::account_actor::AccountError;
use crate::assembly::{AccountResolver, ResolveError};
use crate::model::{Account, AccountCreate, AccountId, Page};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_account(&self, params: AccountCreate) -> Result<AccountId, AccountError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing account is an error.
    #[instrument(skip(self))]
    pub async fn get_account(&self, id: AccountId) -> Result<Account, AccountError> {
        self.get(id.clone()).await?.ok_or(AccountError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_accounts(&self, page: Page) -> Result<Vec<Account>, AccountError> {
        self.query(page).await
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<AccountError>() {
                Ok(domain) => *domain,
                Err(other) => AccountError::ActorCommunicationError(other.to_string()),
            },
            other => AccountError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl AccountResolver for AccountClient {
    async fn resolve_account(&self, id: &AccountId) -> Result<Option<Account>, ResolveError> {
        self.inner.get(id.clone()).await.map_err(ResolveError::from)
    }
}
