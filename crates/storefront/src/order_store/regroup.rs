//! Reassembly of nested orders from the flattened order x line-item join.
//!
//! The join yields one row per line item, repeating the order columns. Rows
//! arrive sorted by order id, so every order occupies one contiguous run.
//! [`OrderGrouper`] walks the rows once, keeping only the order currently
//! being filled:
//!
//! - a row with the current order's id appends a line item;
//! - a row with a different id seals the current order and opens a new one;
//! - [`OrderGrouper::finish`] seals whatever is still open.
//!
//! The last step matters: without it the final order of every scan is lost.

use crate::model::{AccountId, LineItem, Order, OrderId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One row of the order x line-item join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedRow {
    pub order_id: OrderId,
    pub created_at: DateTime<Utc>,
    pub account_id: AccountId,
    pub total_price: Decimal,
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Default)]
pub struct OrderGrouper {
    current: Option<Order>,
    sealed: Vec<Order>,
}

impl OrderGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: FlattenedRow) {
        let FlattenedRow {
            order_id,
            created_at,
            account_id,
            total_price,
            product_id,
            quantity,
        } = row;
        let line = LineItem {
            product_id,
            quantity,
        };

        if let Some(order) = self.current.as_mut().filter(|o| o.id == order_id) {
            order.line_items.push(line);
            return;
        }

        let opened = Order {
            id: order_id,
            created_at,
            account_id,
            total_price,
            line_items: vec![line],
        };
        if let Some(done) = self.current.replace(opened) {
            self.sealed.push(done);
        }
    }

    /// Orders sealed so far, not counting the one still open.
    pub fn sealed(&self) -> usize {
        self.sealed.len()
    }

    pub fn finish(mut self) -> Vec<Order> {
        if let Some(last) = self.current.take() {
            self.sealed.push(last);
        }
        self.sealed
    }
}

/// Regroups an already sorted sequence of rows.
pub fn regroup(rows: impl IntoIterator<Item = FlattenedRow>) -> Vec<Order> {
    let mut grouper = OrderGrouper::new();
    for row in rows {
        grouper.push(row);
    }
    grouper.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(order: &str, product: &str, quantity: u32) -> FlattenedRow {
        FlattenedRow {
            order_id: OrderId::new(order),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            account_id: AccountId::new("acct"),
            total_price: Decimal::new(1000, 2),
            product_id: ProductId::new(product),
            quantity,
        }
    }

    fn shape(orders: &[Order]) -> Vec<(&str, Vec<(&str, u32)>)> {
        orders
            .iter()
            .map(|o| {
                let lines = o
                    .line_items
                    .iter()
                    .map(|l| (l.product_id.as_str(), l.quantity))
                    .collect();
                (o.id.as_str(), lines)
            })
            .collect()
    }

    #[test]
    fn trailing_order_is_flushed() {
        let orders = regroup(vec![row("O1", "P1", 2), row("O1", "P2", 1), row("O2", "P3", 5)]);
        assert_eq!(
            shape(&orders),
            vec![("O1", vec![("P1", 2), ("P2", 1)]), ("O2", vec![("P3", 5)])]
        );
    }

    #[test]
    fn no_rows_no_orders() {
        assert!(regroup(Vec::new()).is_empty());
    }

    #[test]
    fn single_row() {
        let orders = regroup(vec![row("O1", "P1", 3)]);
        assert_eq!(shape(&orders), vec![("O1", vec![("P1", 3)])]);
    }

    #[test]
    fn k_distinct_ids_give_k_orders() {
        let mut rows = Vec::new();
        for order in 0..7 {
            for line in 0..=order {
                rows.push(row(&format!("O{order}"), &format!("P{line}"), line + 1));
            }
        }
        let total_rows = rows.len();

        let orders = regroup(rows);
        assert_eq!(orders.len(), 7);
        assert_eq!(orders.iter().map(|o| o.line_items.len()).sum::<usize>(), total_rows);
        for (i, order) in orders.iter().enumerate() {
            assert_eq!(order.id.as_str(), format!("O{i}"));
            assert_eq!(order.line_items.len(), i + 1);
        }
    }

    #[test]
    fn key_change_seals_previous_order() {
        let mut grouper = OrderGrouper::new();
        grouper.push(row("O1", "P1", 1));
        grouper.push(row("O1", "P2", 1));
        assert_eq!(grouper.sealed(), 0);

        grouper.push(row("O2", "P1", 1));
        assert_eq!(grouper.sealed(), 1);

        let orders = grouper.finish();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].line_items.len(), 2);
    }
}
