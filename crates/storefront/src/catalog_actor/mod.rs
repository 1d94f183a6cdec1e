//! # Catalog Actor
//!
//! Owns the product catalog. Stands in for the remote Product Catalog
//! service and answers every [`ProductQuery`](crate::model::ProductQuery)
//! mode: an id set, a free-text search, or a plain page.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::ids::IdGenerator;
use crate::model::{Product, ProductId};
use record_actor::ResourceActor;
use std::sync::Arc;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize, ids: Arc<dyn IdGenerator>) -> (ResourceActor<Product>, ProductClient) {
    let next_product_id = move || ProductId::new(ids.next_id());
    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_id);
    (actor, ProductClient::new(generic_client))
}
