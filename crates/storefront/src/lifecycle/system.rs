use crate::assembly::OrderAssembly;
use crate::clients::{AccountClient, ProductClient};
use crate::config::AppConfig;
use crate::ids::{IdGenerator, TimeOrderedIds};
use crate::order_store::{SqlOrderStore, StoreError};
use crate::{account_actor, catalog_actor};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("order store unavailable: {0}")]
    Store(#[from] StoreError),
}

/// The running storefront: both record actors, the order store and the
/// assembly service wired on top of them.
///
/// ```ignore
/// let system = StorefrontSystem::start(&AppConfig::from_env()?).await?;
///
/// let account = system.account_client.create_account(AccountCreate::new("Ada")).await?;
/// let order = system.orders.place_order(&account, &lines).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub account_client: AccountClient,
    pub product_client: ProductClient,
    pub orders: OrderAssembly,
    store: SqlOrderStore,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    pub async fn start(config: &AppConfig) -> Result<Self, StartupError> {
        Self::start_with_ids(config, Arc::new(TimeOrderedIds)).await
    }

    /// Like [`start`](Self::start), drawing every account, product and order
    /// id from `ids`.
    pub async fn start_with_ids(config: &AppConfig, ids: Arc<dyn IdGenerator>) -> Result<Self, StartupError> {
        info!(database_url = %config.database_url, "Starting storefront");

        let store = SqlOrderStore::connect(&config.database_url, config.db_max_connections).await?;
        store.migrate().await?;

        let (account_actor, account_client) = account_actor::new(config.actor_buffer_size, ids.clone());
        let (catalog_actor, product_client) = catalog_actor::new(config.actor_buffer_size, ids.clone());
        let account_handle = tokio::spawn(account_actor.run());
        let catalog_handle = tokio::spawn(catalog_actor.run());

        let orders = OrderAssembly::new(
            Arc::new(account_client.clone()),
            Arc::new(product_client.clone()),
            Arc::new(store.clone()),
            ids,
            config.dependency_timeout,
        );

        Ok(Self {
            account_client,
            product_client,
            orders,
            store,
            handles: vec![account_handle, catalog_handle],
        })
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.orders);
        drop(self.account_client);
        drop(self.product_client);
        self.store.close().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
