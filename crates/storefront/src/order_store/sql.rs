//! `sqlx` implementation of [`OrderPersister`] on SQLite.

use super::regroup::{FlattenedRow, OrderGrouper};
use super::{OrderPersister, StoreError};
use crate::model::{AccountId, Order};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, Transaction};
use std::str::FromStr;
use tracing::{debug, error, info, instrument, warn};

const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY NOT NULL,
        created_at TEXT NOT NULL,
        account_id TEXT NOT NULL,
        total_price TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS orders_account_id ON orders (account_id)",
    "CREATE TABLE IF NOT EXISTS order_line_items (
        order_id TEXT NOT NULL REFERENCES orders (id) ON DELETE CASCADE,
        product_id TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity > 0),
        PRIMARY KEY (order_id, product_id)
    )",
];

const SELECT_ORDERS_FOR_ACCOUNT: &str = "
    SELECT o.id AS id, o.created_at AS created_at, o.account_id AS account_id,
           o.total_price AS total_price, li.product_id AS product_id, li.quantity AS quantity
    FROM orders o
    JOIN order_line_items li ON li.order_id = o.id
    WHERE o.account_id = ?
    ORDER BY o.id, li.product_id";

// Three binds per row keeps each statement under SQLite's default limit of
// 999 bound parameters.
const LINE_ITEMS_PER_INSERT: usize = 300;

/// Whether `url` names a private in-memory SQLite database.
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[derive(Debug, sqlx::FromRow)]
struct FlatRecord {
    id: String,
    created_at: DateTime<Utc>,
    account_id: String,
    total_price: String,
    product_id: String,
    quantity: i64,
}

impl FlatRecord {
    fn into_row(self) -> Result<FlattenedRow, StoreError> {
        let total_price = Decimal::from_str(&self.total_price).map_err(|e| StoreError::CorruptRow {
            order_id: self.id.clone(),
            reason: format!("total_price {:?}: {e}", self.total_price),
        })?;
        let quantity = u32::try_from(self.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| StoreError::CorruptRow {
                order_id: self.id.clone(),
                reason: format!("quantity {}", self.quantity),
            })?;

        Ok(FlattenedRow {
            order_id: self.id.into(),
            created_at: self.created_at,
            account_id: self.account_id.into(),
            total_price,
            product_id: self.product_id.into(),
            quantity,
        })
    }
}

/// Order store backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqlOrderStore {
    pool: SqlitePool,
}

impl SqlOrderStore {
    /// Opens a pool on `url`, creating the database file if needed.
    ///
    /// An in-memory database lives only as long as its connection, so it gets
    /// exactly one connection that is never recycled.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(StoreError::Connect)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;
        info!(url, "Order store connected");
        Ok(Self { pool })
    }

    /// Creates the tables if they do not exist yet. Safe to run on every start.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        for &statement in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StoreError::Migration)?;
        }
        debug!(statements = MIGRATIONS.len(), "Schema up to date");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn insert_rows(tx: &mut Transaction<'_, Sqlite>, order: &Order) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO orders (id, created_at, account_id, total_price) VALUES (?, ?, ?, ?)")
            .bind(order.id.as_str())
            .bind(order.created_at)
            .bind(order.account_id.as_str())
            .bind(order.total_price.to_string())
            .execute(&mut **tx)
            .await?;

        for chunk in order.line_items.chunks(LINE_ITEMS_PER_INSERT) {
            let mut insert: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO order_line_items (order_id, product_id, quantity) ");
            insert.push_values(chunk, |mut row, item| {
                row.push_bind(order.id.as_str())
                    .push_bind(item.product_id.as_str())
                    .push_bind(i64::from(item.quantity));
            });
            insert.build().execute(&mut **tx).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl OrderPersister for SqlOrderStore {
    #[instrument(skip(self, order), fields(order_id = %order.id, lines = order.line_items.len()))]
    async fn write_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|source| StoreError::TransactionFailed {
                order_id: order.id.clone(),
                source,
            })?;

        if let Err(source) = Self::insert_rows(&mut tx, order).await {
            if let Err(rollback) = tx.rollback().await {
                warn!(error = %rollback, "Rollback failed, connection will discard the transaction");
            }
            error!(error = %source, "Order write rolled back");
            return Err(StoreError::TransactionFailed {
                order_id: order.id.clone(),
                source,
            });
        }

        tx.commit()
            .await
            .map_err(|source| StoreError::TransactionFailed {
                order_id: order.id.clone(),
                source,
            })?;
        debug!("Order committed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn read_orders_for_account(&self, account_id: &AccountId) -> Result<Vec<Order>, StoreError> {
        let mut records = sqlx::query_as::<_, FlatRecord>(SELECT_ORDERS_FOR_ACCOUNT)
            .bind(account_id.as_str())
            .fetch(&self.pool);

        let mut grouper = OrderGrouper::new();
        let mut rows = 0usize;
        while let Some(record) = records.try_next().await? {
            grouper.push(record.into_row()?);
            rows += 1;
        }

        let orders = grouper.finish();
        debug!(rows, orders = orders.len(), "Regrouped");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, OrderId, ProductId};

    async fn store() -> SqlOrderStore {
        let store = SqlOrderStore::connect("sqlite::memory:", 1).await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn order(id: &str, account: &str, lines: &[(&str, u32)]) -> Order {
        Order {
            id: OrderId::new(id),
            created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
            account_id: AccountId::new(account),
            total_price: Decimal::new(4250, 2),
            line_items: lines
                .iter()
                .map(|(product, quantity)| LineItem {
                    product_id: ProductId::new(*product),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    async fn row_counts(store: &SqlOrderStore) -> (i64, i64) {
        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        let lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_line_items")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        (orders, lines)
    }

    #[tokio::test]
    async fn written_order_reads_back() {
        let store = store().await;
        let placed = order("o1", "a1", &[("p1", 2), ("p2", 1)]);

        store.write_order(&placed).await.unwrap();

        assert_eq!(row_counts(&store).await, (1, 2));
        let read = store.read_orders_for_account(&AccountId::new("a1")).await.unwrap();
        assert_eq!(read, vec![placed]);
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let store = store().await;
        store.migrate().await.unwrap();
        store.write_order(&order("o1", "a1", &[("p1", 1)])).await.unwrap();
        store.migrate().await.unwrap();
        assert_eq!(row_counts(&store).await, (1, 1));
    }

    #[tokio::test]
    async fn failed_line_item_leaves_nothing_behind() {
        let store = store().await;
        // second row violates the (order_id, product_id) primary key
        let broken = order("o1", "a1", &[("p1", 2), ("p1", 3)]);

        let err = store.write_order(&broken).await.unwrap_err();

        assert!(matches!(err, StoreError::TransactionFailed { ref order_id, .. } if order_id.as_str() == "o1"));
        assert_eq!(row_counts(&store).await, (0, 0));
        assert!(store.read_orders_for_account(&AccountId::new("a1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_quantity_is_refused_atomically() {
        let store = store().await;
        let broken = order("o1", "a1", &[("p1", 2), ("p2", 0)]);

        assert!(store.write_order(&broken).await.is_err());
        assert_eq!(row_counts(&store).await, (0, 0));
    }

    #[tokio::test]
    async fn duplicate_order_id_keeps_the_first() {
        let store = store().await;
        store.write_order(&order("o1", "a1", &[("p1", 1)])).await.unwrap();

        let again = order("o1", "a1", &[("p9", 9)]);
        assert!(store.write_order(&again).await.is_err());

        assert_eq!(row_counts(&store).await, (1, 1));
        let read = store.read_orders_for_account(&AccountId::new("a1")).await.unwrap();
        assert_eq!(read[0].line_items[0].product_id.as_str(), "p1");
    }

    #[tokio::test]
    async fn reads_are_scoped_and_sorted() {
        let store = store().await;
        store.write_order(&order("o3", "a1", &[("p2", 1), ("p1", 4)])).await.unwrap();
        store.write_order(&order("o1", "a1", &[("p1", 2)])).await.unwrap();
        store.write_order(&order("o2", "a2", &[("p1", 7)])).await.unwrap();

        let read = store.read_orders_for_account(&AccountId::new("a1")).await.unwrap();
        let ids: Vec<&str> = read.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o3"]);

        let last: Vec<(&str, u32)> = read[1]
            .line_items
            .iter()
            .map(|l| (l.product_id.as_str(), l.quantity))
            .collect();
        assert_eq!(last, vec![("p1", 4), ("p2", 1)]);

        assert!(store.read_orders_for_account(&AccountId::new("nobody")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn large_orders_span_several_inserts() {
        let store = store().await;
        let products: Vec<String> = (0..LINE_ITEMS_PER_INSERT * 2 + 5).map(|i| format!("p{i:05}")).collect();
        let lines: Vec<(&str, u32)> = products.iter().map(|p| (p.as_str(), 1)).collect();

        store.write_order(&order("big", "a1", &lines)).await.unwrap();

        let read = store.read_orders_for_account(&AccountId::new("a1")).await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].line_items.len(), products.len());
    }

    #[tokio::test]
    async fn unreadable_price_is_reported() {
        let store = store().await;
        store.write_order(&order("o1", "a1", &[("p1", 1)])).await.unwrap();
        sqlx::query("UPDATE orders SET total_price = 'lots' WHERE id = 'o1'")
            .execute(&store.pool)
            .await
            .unwrap();

        let err = store.read_orders_for_account(&AccountId::new("a1")).await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptRow { .. }));
    }

    #[test]
    fn memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://orders?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://orders.db"));
    }
}
