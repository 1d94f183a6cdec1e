//! [`ActorEntity`] implementation for [`Product`].

use super::CatalogError;
use crate::model::{Product, ProductCreate, ProductId, ProductQuery};
use record_actor::ActorEntity;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Query = ProductQuery;
    type Error = CatalogError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, CatalogError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if params.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice(params.price));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            description: params.description,
            price: params.price,
        })
    }

    fn select(store: &BTreeMap<ProductId, Self>, query: &ProductQuery) -> Result<Vec<Self>, CatalogError> {
        let products = match query {
            ProductQuery::ByIds(ids) => ids.iter().filter_map(|id| store.get(id)).cloned().collect(),
            ProductQuery::Search { text, page } => {
                let needle = text.to_lowercase();
                page.apply(
                    store
                        .values()
                        .filter(|p| {
                            p.name.to_lowercase().contains(&needle)
                                || p.description.to_lowercase().contains(&needle)
                        })
                        .cloned(),
                )
            }
            ProductQuery::All(page) => page.apply(store.values().cloned()),
        };
        Ok(products)
    }
}
