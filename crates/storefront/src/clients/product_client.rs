//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` with catalog calls, and acts as the
//! [`ProductResolver`] for order placement and enrichment.

use crate::assembly::{ProductResolver, ResolveError};
use crate::catalog_actor::CatalogError;
use crate::model::{Page, Product, ProductCreate, ProductId, ProductQuery};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get(id.clone()).await?.ok_or(CatalogError::NotFound(id))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn products_by_ids(&self, ids: BTreeSet<ProductId>) -> Result<Vec<Product>, CatalogError> {
        self.query(ProductQuery::ByIds(ids)).await
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, text: String, page: Page) -> Result<Vec<Product>, CatalogError> {
        self.query(ProductQuery::Search { text, page }).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, page: Page) -> Result<Vec<Product>, CatalogError> {
        self.query(ProductQuery::All(page)).await
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(domain) => *domain,
                Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductResolver for ProductClient {
    async fn resolve_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, ResolveError> {
        let ids = ids.iter().cloned().collect();
        self.inner
            .query(ProductQuery::ByIds(ids))
            .await
            .map_err(ResolveError::from)
    }
}
