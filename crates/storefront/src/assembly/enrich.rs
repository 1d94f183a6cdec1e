//! Read-side enrichment: stored quantities joined with current catalog data.
//!
//! Name, description and price reflect the catalog at read time, not at order
//! time. A line whose product has left the catalog is omitted.

use crate::model::{Order, OrderDetails, OrderId, OrderedProduct, Product, ProductId};
use std::collections::{BTreeMap, BTreeSet};

/// Every product id referenced by any of the orders, deduplicated and sorted.
pub fn referenced_products(orders: &[Order]) -> Vec<ProductId> {
    orders
        .iter()
        .flat_map(|o| o.line_items.iter().map(|l| l.product_id.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enriched {
    pub orders: Vec<OrderDetails>,
    /// Lines left out because their product no longer resolves.
    pub omitted: Vec<(OrderId, ProductId)>,
}

pub fn enrich(orders: Vec<Order>, products: Vec<Product>) -> Enriched {
    let catalog: BTreeMap<ProductId, Product> = products.into_iter().map(|p| (p.id.clone(), p)).collect();
    let mut omitted = Vec::new();

    let orders = orders
        .into_iter()
        .map(|order| {
            let mut products = Vec::with_capacity(order.line_items.len());
            for line in order.line_items {
                match catalog.get(&line.product_id) {
                    Some(current) => products.push(OrderedProduct {
                        product_id: line.product_id,
                        name: current.name.clone(),
                        description: current.description.clone(),
                        price: current.price,
                        quantity: line.quantity,
                    }),
                    None => omitted.push((order.id.clone(), line.product_id)),
                }
            }
            OrderDetails {
                id: order.id,
                created_at: order.created_at,
                account_id: order.account_id,
                total_price: order.total_price,
                products,
            }
        })
        .collect();

    Enriched { orders, omitted }
}
