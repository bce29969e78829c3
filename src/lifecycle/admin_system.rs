//! # Admin System
//!
//! Owns the two actors for the life of the process. The Product actor starts first and needs
//! no context; the Order actor receives a [`ProductClient`] so its hooks can check stock.
//! Shutdown drops every client, then joins the Order task before the Product task; the order
//! actor holds the last catalog sender.
//!
//! Fixtures are loaded with `Insert`, so seeded orders keep their stored status, timestamps
//! and totals.

use crate::aggregates::{recent_orders, InventoryStats, OrderStats};
use crate::clients::{OrderClient, ProductClient};
use crate::config::AdminConfig;
use crate::fixtures::{FixtureError, SeedData};
use crate::framework::ActorClient;
use crate::model::Order;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// Runtime orchestrator for the admin core.
///
/// Starts the catalog and order actors, hands the order actor a catalog client as its
/// context, and owns the task handles for shutdown.
///
/// ```ignore
/// let system = AdminSystem::start(AdminConfig::default()).await?;
/// let products = system.product_client.list().await?;
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    config: AdminConfig,
    handles: Vec<JoinHandle<()>>,
}

impl AdminSystem {
    /// Spawns both actors with empty stores. Must be called inside a Tokio runtime.
    pub fn new(config: AdminConfig) -> Self {
        let (product_actor, product_generic) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_generic) = crate::order_actor::new(config.channel_buffer);

        let product_client = ProductClient::new(product_generic);
        let order_client = OrderClient::new(order_generic, config.status_update_delay());

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        Self {
            product_client,
            order_client,
            config,
            // Order first: its context keeps the catalog channel open until it exits.
            handles: vec![order_handle, product_handle],
        }
    }

    /// Spawns the actors and loads the bundled fixtures when `seed_fixtures` is set.
    pub async fn start(config: AdminConfig) -> Result<Self, LifecycleError> {
        let seed = config.seed_fixtures;
        let system = Self::new(config);
        if seed {
            system.seed(SeedData::bundled()?).await?;
        }
        Ok(system)
    }

    /// Insert fixture records through the repository interface.
    pub async fn seed(&self, data: SeedData) -> Result<(), LifecycleError> {
        let products = data.products.len();
        let orders = data.orders.len();
        for product in data.products {
            self.product_client.seed(product).await?;
        }
        for order in data.orders {
            self.order_client.seed(order).await?;
        }
        info!(products, orders, "Fixtures loaded");
        Ok(())
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub async fn inventory_stats(&self) -> Result<InventoryStats, LifecycleError> {
        let products = self.product_client.list().await?;
        Ok(InventoryStats::compute(
            &products,
            self.config.low_stock_threshold,
        ))
    }

    pub async fn order_stats(&self) -> Result<OrderStats, LifecycleError> {
        let orders = self.order_client.list().await?;
        Ok(OrderStats::compute(&orders))
    }

    pub async fn recent_orders(&self, n: usize) -> Result<Vec<Order>, LifecycleError> {
        let orders = self.order_client.list().await?;
        Ok(recent_orders(&orders, n).into_iter().cloned().collect())
    }

    /// Drops the clients and waits for both actors to drain their queues and exit.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
