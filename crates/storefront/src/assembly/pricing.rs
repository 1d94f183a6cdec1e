//! Turning requested lines into priced, storable line items.
//!
//! Prices always come from the catalog. The request carries only product ids
//! and quantities.

use crate::model::{LineItem, Product, ProductId, RequestedLine};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Requested quantity per product. A product requested twice keeps the
/// quantity of its last line.
pub fn requested_quantities(lines: &[RequestedLine]) -> BTreeMap<ProductId, u32> {
    lines
        .iter()
        .map(|line| (line.product_id.clone(), line.quantity))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLines {
    /// Surviving lines in product id order.
    pub line_items: Vec<LineItem>,
    pub total: Decimal,
    /// Requested with a positive quantity but unknown to the catalog.
    pub unresolved: Vec<ProductId>,
    /// Requested with quantity zero.
    pub zero_quantity: Vec<ProductId>,
}

/// Prices every requested product the catalog returned.
///
/// Catalog entries nobody asked for are ignored, and duplicates collapse to
/// one line.
pub fn price_lines(requested: &BTreeMap<ProductId, u32>, products: Vec<Product>) -> PricedLines {
    let catalog: BTreeMap<ProductId, Product> = products.into_iter().map(|p| (p.id.clone(), p)).collect();

    let mut priced = PricedLines {
        line_items: Vec::new(),
        total: Decimal::ZERO,
        unresolved: Vec::new(),
        zero_quantity: Vec::new(),
    };
    for (product_id, &quantity) in requested {
        if quantity == 0 {
            priced.zero_quantity.push(product_id.clone());
            continue;
        }
        match catalog.get(product_id) {
            Some(product) => {
                priced.total += product.price * Decimal::from(quantity);
                priced.line_items.push(LineItem {
                    product_id: product_id.clone(),
                    quantity,
                });
            }
            None => priced.unresolved.push(product_id.clone()),
        }
    }
    priced
}
