//! Error types for the order store.

use crate::model::OrderId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open order store: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("schema migration failed: {0}")]
    Migration(#[source] sqlx::Error),

    /// The write was rolled back; no row of the order is visible.
    #[error("transaction for order {order_id} failed: {source}")]
    TransactionFailed {
        order_id: OrderId,
        #[source]
        source: sqlx::Error,
    },

    #[error("order query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("stored row for order {order_id} is unreadable: {reason}")]
    CorruptRow { order_id: String, reason: String },
}
