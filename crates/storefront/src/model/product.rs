use super::{Page, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A catalog product with its current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// The three ways of asking the catalog for products. Exactly one applies
/// per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    /// Products with these ids. Unknown ids are skipped.
    ByIds(BTreeSet<ProductId>),
    /// Case-insensitive match against name or description.
    Search { text: String, page: Page },
    /// Every product, in id order.
    All(Page),
}
