use crate::clients::{ActorClient, CustomerClient, DispatchClient, InventoryClient, RouteClient};
use crate::customer_actor::CustomerError;
use crate::dispatch_actor::DispatchError;
use crate::framework::ServiceError;
use crate::{customer_actor, dispatch_actor, inventory_actor, route_actor};
use restaurant_core::customers::CustomerRecord;
use restaurant_core::inventory::StockEntry;
use restaurant_core::order::{Order, OrderCreate, OrderId};
use restaurant_core::routes::RouteEdge;
use restaurant_core::{EngineConfig, RouteError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

/// Why [`RestaurantSystem::place_order`] did not queue an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaceOrderError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Every engine's records at one moment, one flat list per engine.
///
/// Each list is taken inside its own actor, so each is internally consistent;
/// the four lists are not taken atomically with respect to each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSnapshot {
    pub customers: Vec<CustomerRecord>,
    /// Queued orders, highest priority first.
    pub queued_orders: Vec<Order>,
    /// Ingredients sorted by name.
    pub stock: Vec<StockEntry>,
    pub roads: Vec<RouteEdge>,
}

/// The running restaurant: one actor per engine plus a client for each.
///
/// ```ignore
/// let system = RestaurantSystem::new(&EngineConfig::default(), 5)?;
///
/// system.customers.register(record).await?;
/// let id = system.place_order(params).await?;
/// let next = system.kitchen.extract_highest().await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub customers: CustomerClient,
    pub kitchen: DispatchClient,
    pub inventory: InventoryClient,
    pub routes: RouteClient,

    /// Actor tasks, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts every engine actor. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    /// [`RouteError::TooManyLocations`] if `locations` exceeds
    /// `config.max_locations`. Nothing is spawned in that case.
    pub fn new(config: &EngineConfig, locations: usize) -> Result<Self, RouteError> {
        let (route_actor, route_client) = route_actor::new(config, locations)?;
        let (customer_actor, customer_client) = customer_actor::new();
        let (dispatch_actor, dispatch_client) = dispatch_actor::new(config);
        let (inventory_actor, inventory_client) = inventory_actor::new(config);

        let handles = vec![
            tokio::spawn(customer_actor.run()),
            tokio::spawn(dispatch_actor.run()),
            tokio::spawn(inventory_actor.run()),
            tokio::spawn(route_actor.run()),
        ];

        info!(
            max_orders = config.max_orders,
            table_size = config.initial_table_size,
            locations,
            "Restaurant system started"
        );

        Ok(Self {
            customers: CustomerClient::new(customer_client),
            kitchen: DispatchClient::new(dispatch_client),
            inventory: InventoryClient::new(inventory_client),
            routes: RouteClient::new(route_client),
            handles,
        })
    }

    /// Queues an order for a registered customer.
    ///
    /// The customer is checked first; an unknown customer never reaches the kitchen.
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, PlaceOrderError> {
        let customer_id = params.customer_id;
        if self.customers.lookup(customer_id).await?.is_none() {
            return Err(CustomerError::NotFound(customer_id).into());
        }
        Ok(self.kitchen.place_order(params).await?)
    }

    /// Collects a snapshot from every engine concurrently.
    pub async fn snapshot(&self) -> Result<RestaurantSnapshot, ServiceError> {
        let (customers, queued_orders, stock, roads) = tokio::try_join!(
            self.customers.inner().snapshot(),
            self.kitchen.inner().snapshot(),
            self.inventory.inner().snapshot(),
            self.routes.inner().snapshot(),
        )?;
        Ok(RestaurantSnapshot {
            customers,
            queued_orders,
            stock,
            roads,
        })
    }

    /// Drops every client and waits for the actors to drain and stop.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so this
    /// waits until those are dropped too.
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        info!("Shutting down restaurant system");
        drop(self.customers);
        drop(self.kitchen);
        drop(self.inventory);
        drop(self.routes);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(ServiceError::TaskFailed(e.to_string()));
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
