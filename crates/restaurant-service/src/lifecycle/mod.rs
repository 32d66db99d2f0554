//! # System Lifecycle
//!
//! Starts the engine actors, hands out their clients and shuts them down.
//!
//! ## Startup
//!
//! [`RestaurantSystem::new`] builds each engine from one
//! [`EngineConfig`](restaurant_core::EngineConfig), wraps it in its actor and
//! spawns it. The engines are independent: no actor
//! holds another actor's client, so there is no wiring order to respect.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sending side of every channel
//! 2. **Actors drain** - queued requests are still answered
//! 3. **Actors stop** - `recv()` returns `None` and the loop ends
//! 4. **Await** - [`RestaurantSystem::shutdown`] joins every task
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber. Only the binary calls it; tests
//! and embedders install their own.

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use self::tracing::setup_tracing;
