use restaurant_core::customers::{CustomerId, CustomerRecord};
use restaurant_core::inventory::InventoryRecord;
use restaurant_core::order::{OrderCreate, OrderState};
use restaurant_core::EngineConfig;
use restaurant_service::clients::ActorClient;
use restaurant_service::dispatch_actor::DispatchError;
use restaurant_service::lifecycle::{setup_tracing, RestaurantSystem};
use tracing::{error, info, warn, Instrument};

const DELIVERY_ZONES: usize = 5;

fn load_config() -> Result<EngineConfig, String> {
    match std::env::var("RESTAURANT_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading configuration");
            EngineConfig::load(&path).map_err(|e| e.to_string())
        }
        Err(_) => Ok(EngineConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = load_config()?;
    info!(?config, "Starting restaurant");

    let system = RestaurantSystem::new(&config, DELIVERY_ZONES).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("customer_setup");
    async {
        for (id, name, phone) in [(101, "Asha", "555-0101"), (102, "Bruno", "555-0102")] {
            let record = CustomerRecord::new(
                CustomerId(id),
                name,
                phone,
                format!("{}@example.com", name.to_lowercase()),
            );
            system.customers.register(record).await?;
        }
        let tier = system
            .customers
            .add_loyalty_points(CustomerId(101), 3200)
            .await?;
        info!(%tier, "Loyalty points added");
        Ok::<_, restaurant_service::customer_actor::CustomerError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("pantry_setup");
    async {
        system
            .inventory
            .stock("flour", InventoryRecord::new(40, "kg", 1.2, 10))
            .await?;
        system
            .inventory
            .stock("saffron", InventoryRecord::new(5, "g", 9.5, 2))
            .await?;

        if let Err(e) = system.inventory.reduce("saffron", 10).await {
            warn!(error = %e, "Reduction refused");
        }
        let left = system.inventory.reduce("flour", 35).await?;
        info!(left, "Flour used");

        for entry in system.inventory.low_stock().await? {
            warn!(ingredient = %entry.name, quantity = entry.record.quantity, "Needs reorder");
        }
        Ok::<_, restaurant_service::inventory_actor::InventoryError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("kitchen");
    async {
        let orders = [
            (CustomerId(101), 4, vec!["biryani"], 18.0, 2),
            (CustomerId(102), 7, vec!["dal", "naan"], 11.5, 5),
            (CustomerId(101), 4, vec!["kulfi"], 4.0, 1),
            (CustomerId(999), 9, vec!["tea"], 2.0, 9),
        ];
        let mut placed = Vec::new();
        for (customer_id, table, items, total, priority) in orders {
            let params = OrderCreate {
                customer_id,
                table,
                items: items.into_iter().map(String::from).collect(),
                total,
                priority,
            };
            match system.place_order(params).await {
                Ok(id) => {
                    info!(order_id = %id, priority, "Order placed");
                    placed.push(id);
                }
                Err(e) => error!(error = %e, "Order not placed"),
            }
        }

        if let Some(&changed_mind) = placed.last() {
            let cancelled = system.kitchen.cancel(changed_mind).await?;
            info!(order_id = %cancelled.id(), "Order cancelled before cooking");
        }

        while let Some(order) = system.kitchen.extract_highest().await? {
            info!(
                order_id = %order.id(),
                table = order.table(),
                priority = order.priority(),
                "Cooking"
            );
            for target in [
                OrderState::Confirmed,
                OrderState::Preparing,
                OrderState::Ready,
                OrderState::Served,
            ] {
                system.kitchen.transition(order.id(), target).await?;
            }
        }

        if let Some(&first) = placed.first() {
            let refunded = system.kitchen.transition(first, OrderState::Refunded).await?;
            warn!(order_id = %refunded.id(), total = refunded.total(), "Order refunded");
        }

        for order in system.kitchen.history().await? {
            info!(order_id = %order.id(), state = %order.state(), "On record");
        }
        Ok::<_, DispatchError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("delivery_planning");
    async {
        let edges = [(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8), (2, 4, 10), (3, 4, 2)];
        for (from, to, weight) in edges {
            system.routes.add_edge(from, to, weight).await?;
        }

        let paths = system.routes.shortest_paths(0).await?;
        info!(distances = ?paths.distances(), "Shortest distances from the restaurant");
        if let Some(route) = paths.route_to(4) {
            info!(?route, "Route to zone 4");
        }

        let network = system.routes.minimum_network().await?;
        info!(total = %network.total_weight(), "Minimum connecting network");

        let tour = system.routes.tour(0).await?;
        info!(
            stops = ?tour.stops,
            route = ?tour.route,
            total = %tour.total_weight,
            "Delivery tour"
        );

        let edges = system.routes.snapshot().await?;
        info!(count = edges.len(), "Road segments");
        Ok::<_, restaurant_service::route_actor::RouteServiceError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let snapshot = system.snapshot().await.map_err(|e| e.to_string())?;
    info!(
        customers = snapshot.customers.len(),
        queued_orders = snapshot.queued_orders.len(),
        ingredients = snapshot.stock.len(),
        roads = snapshot.roads.len(),
        "Closing snapshot"
    );

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Restaurant closed");
    Ok(())
}
