//! # Order Store
//!
//! Relational storage for orders and their line items.
//!
//! - [`OrderPersister`] is the seam the assembly service writes and reads
//!   through.
//! - [`SqlOrderStore`] implements it on `sqlx` with two tables, `orders` and
//!   `order_line_items`, joined on `order_id`.
//! - [`regroup`] turns the flattened join back into nested orders.
//!
//! A write is all-or-nothing: either the order row and every line item row
//! become visible, or none do.

pub mod error;
pub mod regroup;
pub mod sql;

pub use error::StoreError;
pub use regroup::{FlattenedRow, OrderGrouper};
pub use sql::SqlOrderStore;

use crate::model::{AccountId, Order};
use async_trait::async_trait;

#[async_trait]
pub trait OrderPersister: Send + Sync {
    /// Stores the order row and all of its line items atomically.
    async fn write_order(&self, order: &Order) -> Result<(), StoreError>;

    /// All orders of the account with their line items, ascending by order id.
    ///
    /// An order without line items is not returned.
    async fn read_orders_for_account(&self, account_id: &AccountId) -> Result<Vec<Order>, StoreError>;
}
