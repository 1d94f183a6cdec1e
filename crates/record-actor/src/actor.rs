//! # Generic Actor Server
//!
//! The `ResourceActor` owns the records of one entity type and processes
//! requests sequentially, so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a
///    client (interface).
/// 2. **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3. **Use**: clone the client wherever records are needed. The actor exits
///    once every client clone has been dropped.
///
/// # Operations
///
/// * **Create**: draws an id from the generator, builds the record with
///   [`ActorEntity::from_create_params`], and inserts it. A generator that
///   repeats an id is rejected with [`FrameworkError::DuplicateId`] rather than
///   overwriting the existing record.
/// * **Get**: clone of the record, or `None`.
/// * **Query**: [`ActorEntity::select`] over the ordered store.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait for
    ///   space when it is full.
    /// * `next_id` - id generator, called once per create request.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Account" instead of "storefront::model::account::Account"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(entity_type, params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Query { query, respond_to } => {
                    let result = T::select(&self.store, &query)
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(items) => debug!(entity_type, ?query, hits = items.len(), "Query"),
                        Err(e) => warn!(entity_type, ?query, error = %e, "Query rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, entity_type: &str, params: T::Create) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id)();
        let item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        match self.store.entry(id.clone()) {
            Entry::Occupied(_) => {
                warn!(entity_type, %id, "Generated id already in use");
                Err(FrameworkError::DuplicateId(id.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
                info!(entity_type, %id, size = self.store.len(), "Created");
                Ok(id)
            }
        }
    }
}
