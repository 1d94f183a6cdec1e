//! # Account Actor
//!
//! Owns the account records and answers lookups by id and paged listings.
//! Stands in for the remote Account Lookup service.
//!
//! - [`entity`] - [`ActorEntity`](record_actor::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`AccountError`]
//! - [`new()`] - factory returning the actor and its [`AccountClient`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AccountClient;
use crate::ids::IdGenerator;
use crate::model::{Account, AccountId};
use record_actor::ResourceActor;
use std::sync::Arc;

/// Creates a new Account actor and its client.
pub fn new(buffer_size: usize, ids: Arc<dyn IdGenerator>) -> (ResourceActor<Account>, AccountClient) {
    let next_account_id = move || AccountId::new(ids.next_id());
    let (actor, generic_client) = ResourceActor::new(buffer_size, next_account_id);
    (actor, AccountClient::new(generic_client))
}
