//! # Order Assembly
//!
//! Places orders and reads them back, coordinating three collaborators:
//!
//! 1. [`AccountResolver`] - the account must exist before anything else runs.
//! 2. [`ProductResolver`] - one batched lookup for all requested products,
//!    which also supplies every price.
//! 3. [`OrderPersister`] - one atomic write per order.
//!
//! ## Placement
//!
//! ```text
//! validate account -> resolve products (1 call) -> price -> write (atomic) -> Order
//! ```
//!
//! Requested products the catalog does not know, and lines with quantity zero,
//! are dropped rather than failing the order. The drop is logged at `warn`
//! with `partial_resolution = true`. Every other failure aborts before the
//! write, so nothing partial is stored.
//!
//! ## Retrieval
//!
//! ```text
//! read (flattened join, regrouped) -> resolve products (1 call) -> enrich
//! ```
//!
//! ## Deadlines
//!
//! Each collaborator call runs under the same deadline. Overrunning it drops
//! the in-flight call (which rolls back an open store transaction) and fails
//! with [`OrderError::Timeout`]. Nothing is retried here.

pub mod enrich;
pub mod error;
pub mod pricing;
pub mod resolvers;

pub use error::*;
pub use resolvers::*;

use crate::ids::IdGenerator;
use crate::model::{AccountId, Order, OrderDetails, OrderId, RequestedLine};
use crate::order_store::OrderPersister;
use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// The order assembly service. Cheap to clone; clones share collaborators.
#[derive(Clone)]
pub struct OrderAssembly {
    accounts: Arc<dyn AccountResolver>,
    products: Arc<dyn ProductResolver>,
    store: Arc<dyn OrderPersister>,
    ids: Arc<dyn IdGenerator>,
    deadline: Duration,
}

impl OrderAssembly {
    pub fn new(
        accounts: Arc<dyn AccountResolver>,
        products: Arc<dyn ProductResolver>,
        store: Arc<dyn OrderPersister>,
        ids: Arc<dyn IdGenerator>,
        deadline: Duration,
    ) -> Self {
        Self {
            accounts,
            products,
            store,
            ids,
            deadline,
        }
    }

    /// Validates, prices and stores a new order.
    #[instrument(skip(self, lines), fields(requested = lines.len()))]
    pub async fn place_order(&self, account_id: &AccountId, lines: &[RequestedLine]) -> Result<Order, OrderError> {
        debug!(?lines, "place_order called");

        let account = self
            .bounded(Dependency::AccountLookup, self.accounts.resolve_account(account_id))
            .await?
            .map_err(|e| {
                error!(error = %e, "Account lookup failed");
                OrderError::AccountLookupFailed(e)
            })?;
        if account.is_none() {
            warn!("Unknown account");
            return Err(OrderError::AccountNotFound(account_id.clone()));
        }

        let requested = pricing::requested_quantities(lines);
        let wanted: Vec<_> = requested
            .iter()
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(id, _)| id.clone())
            .collect();
        let products = if wanted.is_empty() {
            Vec::new()
        } else {
            self.bounded(Dependency::ProductCatalog, self.products.resolve_products(&wanted))
                .await?
                .map_err(|e| {
                    error!(error = %e, "Product resolution failed");
                    OrderError::ProductResolutionFailed(e)
                })?
        };

        let priced = pricing::price_lines(&requested, products);
        if !priced.unresolved.is_empty() {
            warn!(
                partial_resolution = true,
                unresolved = ?priced.unresolved,
                "Dropping lines for unknown products"
            );
        }
        if !priced.zero_quantity.is_empty() {
            debug!(zero_quantity = ?priced.zero_quantity, "Dropping zero-quantity lines");
        }

        let order = Order {
            id: OrderId::new(self.ids.next_id()),
            created_at: Utc::now(),
            account_id: account_id.clone(),
            total_price: priced.total,
            line_items: priced.line_items,
        };

        self.bounded(Dependency::OrderStore, self.store.write_order(&order))
            .await?
            .map_err(|e| {
                error!(order_id = %order.id, error = %e, "Order write failed");
                OrderError::PersistenceFailed(e)
            })?;

        info!(
            order_id = %order.id,
            lines = order.line_items.len(),
            total = %order.total_price,
            "Order placed"
        );
        Ok(order)
    }

    /// The account's orders, oldest first, with current catalog data.
    ///
    /// The account itself is not validated: an unknown account simply has no
    /// orders.
    #[instrument(skip(self))]
    pub async fn get_orders_for_account(&self, account_id: &AccountId) -> Result<Vec<OrderDetails>, OrderError> {
        let orders = self
            .bounded(Dependency::OrderStore, self.store.read_orders_for_account(account_id))
            .await?
            .map_err(|e| {
                error!(error = %e, "Order read failed");
                OrderError::PersistenceFailed(e)
            })?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let referenced = enrich::referenced_products(&orders);
        let products = self
            .bounded(Dependency::ProductCatalog, self.products.resolve_products(&referenced))
            .await?
            .map_err(|e| {
                error!(error = %e, "Product resolution failed");
                OrderError::ProductResolutionFailed(e)
            })?;

        let enriched = enrich::enrich(orders, products);
        if !enriched.omitted.is_empty() {
            warn!(
                partial_resolution = true,
                omitted = ?enriched.omitted,
                "Omitting lines for products no longer in the catalog"
            );
        }
        debug!(orders = enriched.orders.len(), "Orders assembled");
        Ok(enriched.orders)
    }

    async fn bounded<T>(&self, dependency: Dependency, call: impl Future<Output = T>) -> Result<T, OrderError> {
        tokio::time::timeout(self.deadline, call).await.map_err(|_| {
            error!(%dependency, after = ?self.deadline, "Deadline exceeded");
            OrderError::Timeout {
                dependency,
                after: self.deadline,
            }
        })
    }
}
