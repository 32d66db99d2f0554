use restaurant_core::customers::{CustomerId, CustomerRecord, MembershipTier};
use restaurant_core::dispatch::RejectReason;
use restaurant_core::inventory::InventoryRecord;
use restaurant_core::order::{Order, OrderCreate, OrderId, OrderState};
use restaurant_core::{EngineConfig, RouteError};
use restaurant_service::clients::ActorClient;
use restaurant_service::customer_actor::CustomerError;
use restaurant_service::dispatch_actor::DispatchError;
use restaurant_service::inventory_actor::InventoryError;
use restaurant_service::lifecycle::{PlaceOrderError, RestaurantSystem};
use restaurant_service::route_actor::RouteServiceError;

fn customer(id: u32, name: &str) -> CustomerRecord {
    CustomerRecord::new(CustomerId(id), name, "555-0100", format!("{name}@example.com"))
}

fn order_for(customer_id: u32, priority: i32) -> OrderCreate {
    OrderCreate {
        customer_id: CustomerId(customer_id),
        table: 2,
        items: vec!["Ramen".to_string()],
        total: 16.0,
        priority,
    }
}

fn system() -> RestaurantSystem {
    RestaurantSystem::new(&EngineConfig::default(), 5).expect("Failed to start system")
}

/// Full end-to-end run through every actor.
#[tokio::test]
async fn test_full_restaurant_flow() {
    let system = system();

    for (id, name) in [(50, "e"), (25, "b"), (75, "g"), (10, "a"), (30, "c")] {
        system
            .customers
            .register(customer(id, name))
            .await
            .expect("Failed to register customer");
    }
    let ids: Vec<u32> = system
        .customers
        .snapshot()
        .await
        .expect("Failed to list customers")
        .iter()
        .map(|record| record.id.0)
        .collect();
    assert_eq!(ids, vec![10, 25, 30, 50, 75]);

    for priority in [2, 5, 1] {
        system
            .place_order(order_for(25, priority))
            .await
            .expect("Failed to place order");
    }
    let top = system.kitchen.peek_highest().await.unwrap().unwrap();
    assert_eq!(top.priority(), 5);
    system.kitchen.extract_highest().await.unwrap();
    let next = system.kitchen.peek_highest().await.unwrap().unwrap();
    assert_eq!(next.priority(), 2);

    system
        .inventory
        .stock("basil", InventoryRecord::new(5, "bunch", 0.8, 1))
        .await
        .unwrap();
    let refused = system.inventory.reduce("basil", 10).await;
    assert!(matches!(
        refused,
        Err(InventoryError::InsufficientStock { available: 5, .. })
    ));
    let record = system.inventory.retrieve("basil").await.unwrap().unwrap();
    assert_eq!(record.quantity, 5);

    let edges = [(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8), (2, 4, 10), (3, 4, 2)];
    for (from, to, weight) in edges {
        system.routes.add_edge(from, to, weight).await.unwrap();
    }
    let paths = system.routes.shortest_paths(0).await.unwrap();
    assert_eq!(paths.distances(), &[0, 3, 2, 8, 10]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unknown_customer_never_reaches_kitchen() {
    let system = system();

    let result = system.place_order(order_for(404, 3)).await;
    assert_eq!(
        result,
        Err(PlaceOrderError::Customer(CustomerError::NotFound(CustomerId(404))))
    );
    let status = system.kitchen.status().await.unwrap();
    assert_eq!(status.queued, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_order_is_rejected_without_consuming_an_id() {
    let system = system();
    system.customers.register(customer(1, "ivy")).await.unwrap();

    let mut bad = order_for(1, 1);
    bad.total = -3.0;
    let result = system.place_order(bad).await;
    assert!(matches!(
        result,
        Err(PlaceOrderError::Dispatch(DispatchError::InvalidOrder(_)))
    ));

    let id = system.place_order(order_for(1, 1)).await.unwrap();
    assert_eq!(id, OrderId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_kitchen_fails_closed_when_full() {
    let config = EngineConfig {
        max_orders: 2,
        ..EngineConfig::default()
    };
    let system = RestaurantSystem::new(&config, 3).unwrap();
    system.customers.register(customer(7, "kai")).await.unwrap();

    system.place_order(order_for(7, 1)).await.unwrap();
    system.place_order(order_for(7, 2)).await.unwrap();
    let overflow = system.place_order(order_for(7, 9)).await;

    match overflow {
        Err(PlaceOrderError::Dispatch(error)) => {
            assert_eq!(error.reason(), Some(RejectReason::Full { capacity: 2 }));
        }
        other => panic!("Expected a full queue, got {other:?}"),
    }
    let top = system.kitchen.peek_highest().await.unwrap().unwrap();
    assert_eq!(top.priority(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_admit_refuses_orders_past_created() {
    let system = system();

    let mut order = Order::new(OrderId(90), order_for(1, 4)).unwrap();
    assert!(order.try_transition(OrderState::Confirmed));

    let error = system.kitchen.admit(order).await.unwrap_err();
    assert_eq!(
        error.reason(),
        Some(RejectReason::NotCreated(OrderState::Confirmed))
    );
    let returned = error.into_order().expect("Rejected order is handed back");
    assert_eq!(returned.id(), OrderId(90));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_served_order_cannot_go_back_to_preparing() {
    let system = system();
    system.customers.register(customer(3, "lee")).await.unwrap();
    system.place_order(order_for(3, 1)).await.unwrap();

    let mut order = system.kitchen.extract_highest().await.unwrap().unwrap();
    for state in [
        OrderState::Confirmed,
        OrderState::Preparing,
        OrderState::Ready,
        OrderState::Served,
    ] {
        assert!(order.try_transition(state));
    }
    assert!(!order.try_transition(OrderState::Preparing));
    assert_eq!(order.state(), OrderState::Served);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_loyalty_points_raise_tier() {
    let system = system();
    system.customers.register(customer(8, "mo")).await.unwrap();

    let tier = system
        .customers
        .add_loyalty_points(CustomerId(8), 1200)
        .await
        .unwrap();
    assert_eq!(tier, MembershipTier::Silver);
    let tier = system
        .customers
        .add_loyalty_points(CustomerId(8), 4000)
        .await
        .unwrap();
    assert_eq!(tier, MembershipTier::Platinum);

    let duplicate = system.customers.register(customer(8, "mo")).await;
    assert_eq!(duplicate, Err(CustomerError::AlreadyRegistered(CustomerId(8))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_route_errors_surface_through_client() {
    let system = system();

    let negative = system.routes.add_edge(0, 1, -4).await;
    assert!(matches!(
        negative,
        Err(RouteServiceError::Route(RouteError::NegativeWeight { .. }))
    ));
    let foreign = system.routes.add_edge(0, 12, 3).await;
    assert_eq!(foreign, Err(RouteServiceError::UnknownLocation(12)));

    // Still serving after both refusals.
    let visited = system.routes.breadth_first(0).await.unwrap();
    assert_eq!(visited, vec![0]);

    system.shutdown().await.unwrap();
}

#[test]
fn test_too_many_locations_spawns_nothing() {
    let config = EngineConfig {
        max_locations: 4,
        ..EngineConfig::default()
    };
    // No runtime here: an attempt to spawn would panic.
    let result = RestaurantSystem::new(&config, 9);
    assert!(matches!(
        result,
        Err(RouteError::TooManyLocations { requested: 9, max: 4 })
    ));
}

#[tokio::test]
async fn test_concurrent_clients_share_one_queue() {
    let system = system();
    system.customers.register(customer(1, "ana")).await.unwrap();

    let mut tasks = Vec::new();
    for priority in 0..40 {
        let kitchen = system.kitchen.clone();
        tasks.push(tokio::spawn(async move {
            let order = Order::new(OrderId(1000 + priority as u32), order_for(1, priority))
                .map_err(|e| e.to_string())?;
            kitchen.admit(order).await.map_err(|e| e.to_string())
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let mut extracted = Vec::new();
    while let Some(order) = system.kitchen.extract_highest().await.unwrap() {
        extracted.push(order.priority());
    }
    let expected: Vec<i32> = (0..40).rev().collect();
    assert_eq!(extracted, expected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_inventory_grows_past_initial_table() {
    let config = EngineConfig {
        initial_table_size: 5,
        ..EngineConfig::default()
    };
    let system = RestaurantSystem::new(&config, 1).unwrap();

    for n in 0..30 {
        system
            .inventory
            .stock(&format!("spice-{n}"), InventoryRecord::new(n, "g", 0.1, 3))
            .await
            .unwrap();
    }
    let stock = system.inventory.snapshot().await.unwrap();
    assert_eq!(stock.len(), 30);
    assert_eq!(
        system.inventory.retrieve("spice-17").await.unwrap().unwrap().quantity,
        17
    );

    let low = system.inventory.low_stock().await.unwrap();
    assert_eq!(low.len(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clones() {
    let system = system();
    let routes = system.routes.clone();

    let late = tokio::spawn(async move {
        routes.add_edge(0, 1, 2).await.unwrap();
        routes.shortest_paths(0).await.unwrap().distance(1)
    });

    system.shutdown().await.unwrap();
    assert_eq!(late.await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_system_snapshot_collects_every_engine() {
    let system = system();
    system.customers.register(customer(2, "noor")).await.unwrap();
    system.customers.register(customer(1, "omar")).await.unwrap();
    system.place_order(order_for(2, 3)).await.unwrap();
    system.place_order(order_for(1, 8)).await.unwrap();
    system
        .inventory
        .stock("rice", InventoryRecord::new(20, "kg", 1.5, 5))
        .await
        .unwrap();
    system.routes.add_edge(3, 1, 6).await.unwrap();

    let snapshot = system.snapshot().await.unwrap();
    let customer_ids: Vec<u32> = snapshot.customers.iter().map(|c| c.id.0).collect();
    assert_eq!(customer_ids, vec![1, 2]);
    let priorities: Vec<i32> = snapshot.queued_orders.iter().map(Order::priority).collect();
    assert_eq!(priorities, vec![8, 3]);
    assert_eq!(snapshot.stock[0].name, "rice");
    assert_eq!(snapshot.roads.len(), 1);
    assert_eq!((snapshot.roads[0].from, snapshot.roads[0].to), (1, 3));

    // Taking a snapshot leaves the engines untouched.
    assert_eq!(system.kitchen.status().await.unwrap().queued, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelled_order_leaves_queue_but_stays_on_record() {
    let system = system();
    system.customers.register(customer(5, "pia")).await.unwrap();
    let first = system.place_order(order_for(5, 2)).await.unwrap();
    let second = system.place_order(order_for(5, 6)).await.unwrap();

    let cancelled = system.kitchen.cancel(second).await.unwrap();
    assert_eq!(cancelled.state(), OrderState::Cancelled);
    assert_eq!(system.kitchen.status().await.unwrap().queued, 1);

    let next = system.kitchen.extract_highest().await.unwrap().unwrap();
    assert_eq!(next.id(), first);

    let on_record = system.kitchen.lookup(second).await.unwrap().unwrap();
    assert_eq!(on_record.state(), OrderState::Cancelled);
    let again = system.kitchen.cancel(second).await;
    assert_eq!(
        again,
        Err(DispatchError::TransitionRefused {
            id: second,
            from: OrderState::Cancelled,
            to: OrderState::Cancelled,
        })
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dispatched_order_is_served_and_refunded() {
    let system = system();
    system.customers.register(customer(6, "quinn")).await.unwrap();
    let id = system.place_order(order_for(6, 1)).await.unwrap();

    // Confirmed while still waiting; stays queued.
    system
        .kitchen
        .transition(id, OrderState::Confirmed)
        .await
        .unwrap();
    let queued = system.kitchen.peek_highest().await.unwrap().unwrap();
    assert_eq!(queued.state(), OrderState::Confirmed);

    system.kitchen.extract_highest().await.unwrap().unwrap();
    for target in [OrderState::Preparing, OrderState::Ready, OrderState::Served] {
        system.kitchen.transition(id, target).await.unwrap();
    }
    let refused = system.kitchen.transition(id, OrderState::Preparing).await;
    assert!(matches!(
        refused,
        Err(DispatchError::TransitionRefused {
            from: OrderState::Served,
            ..
        })
    ));
    let refunded = system
        .kitchen
        .transition(id, OrderState::Refunded)
        .await
        .unwrap();
    assert_eq!(refunded.state(), OrderState::Refunded);

    let history = system.kitchen.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].state(), OrderState::Refunded);

    let unknown = system.kitchen.cancel(OrderId(4040)).await;
    assert_eq!(unknown, Err(DispatchError::UnknownOrder(OrderId(4040))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_tour_reaches_every_spoke_of_a_star() {
    let system = system();
    for (to, weight) in [(1, 1), (2, 5), (3, 2)] {
        system.routes.add_edge(0, to, weight).await.unwrap();
    }

    let tour = system.routes.tour(0).await.unwrap();
    assert_eq!(tour.stops, vec![0, 1, 3, 2, 0]);
    assert_eq!(tour.route, vec![0, 1, 0, 3, 0, 2, 0]);
    assert_eq!(tour.total_weight, 16);

    system.shutdown().await.unwrap();
}
