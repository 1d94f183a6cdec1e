//! # Record Actor
//!
//! Building blocks for record-owning services that run as Tokio actors.
//!
//! Each record type (accounts, catalog products, ...) is owned by exactly one
//! [`ResourceActor`]. The actor holds the records in an ordered in-memory map,
//! processes requests one at a time, and is reached only through a cloneable
//! [`ResourceClient`]. Nothing outside the actor task touches the map, so no
//! locks are needed.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - what a record is, how it is built
//!    from a create payload, and how a query selects records.
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop and the store.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async
//!    calls over `mpsc` + `oneshot` channels.
//!
//! ## Request Set
//!
//! Records are append-only from the point of view of this crate: a record can
//! be created, fetched by id, or selected by an entity-defined query. There is
//! no update or delete path.
//!
//! ```rust
//! use record_actor::{ActorEntity, ResourceActor};
//! use std::collections::BTreeMap;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, text: String }
//!
//! #[derive(Debug)]
//! struct NoteCreate { text: String }
//!
//! #[derive(Debug)]
//! struct Containing(String);
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("empty note")]
//! struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Query = Containing;
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
//!         if params.text.is_empty() {
//!             return Err(NoteError);
//!         }
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     fn select(store: &BTreeMap<u32, Self>, query: &Containing) -> Result<Vec<Self>, NoteError> {
//!         Ok(store.values().filter(|n| n.text.contains(&query.0)).cloned().collect())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0;
//!     let (actor, client) = ResourceActor::<Note>::new(8, move || { next += 1; next });
//!     tokio::spawn(actor.run());
//!
//!     let id = client.create(NoteCreate { text: "buy milk".into() }).await.unwrap();
//!     let note = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(note.text, "buy milk");
//!
//!     let hits = client.query(Containing("milk".into())).await.unwrap();
//!     assert_eq!(hits.len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] whose requests are
//! answered from a queue of expectations instead of a running actor. It is the
//! usual way to test code that sits on top of a client, including failure
//! injection and call counting.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
