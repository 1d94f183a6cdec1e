//! # ActorEntity Trait
//!
//! The contract a record type implements to be owned by a [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types keep every request typed: an account actor only accepts
//! account create payloads and account queries, and the compiler rejects
//! anything else.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

/// A record owned by a [`ResourceActor`](crate::ResourceActor).
///
/// # Ordering
/// Ids are `Ord` and the actor keeps records in a `BTreeMap`, so every
/// [`select`](ActorEntity::select) sees records in ascending id order. Paged
/// queries rely on that to return stable windows.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Identifier assigned by the actor's id generator.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a record.
    type Create: Send + Sync + Debug;

    /// Entity-specific selection (by id set, search, page window, ...).
    type Query: Send + Sync + Debug;

    /// Per-entity error type, boxed into [`FrameworkError::EntityError`](crate::FrameworkError::EntityError)
    /// when it crosses the channel.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its freshly generated id and the create payload.
    /// Validation belongs here; an `Err` means nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Selects records for a query. Runs inside the actor task with read-only
    /// access to the whole store.
    fn select(
        store: &BTreeMap<Self::Id, Self>,
        query: &Self::Query,
    ) -> Result<Vec<Self>, Self::Error>;
}
