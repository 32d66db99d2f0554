//! # Restaurant Service
//!
//! Hosts the `restaurant-core` engines behind Tokio actors so any number of
//! tasks can share them.
//!
//! ## Layers
//!
//! 1. **[`framework`]** - the generic [`EngineActor`](framework::EngineActor) /
//!    [`EngineClient`](framework::EngineClient) pair and the [`Engine`](framework::Engine)
//!    contract each engine implements.
//! 2. **Actors** ([`customer_actor`], [`dispatch_actor`], [`inventory_actor`],
//!    [`route_actor`]) - commands, replies and errors for one engine each.
//! 3. **[`clients`]** - typed async wrappers that turn replies into `Result`s.
//! 4. **[`lifecycle`]** - [`RestaurantSystem`](lifecycle::RestaurantSystem) starts
//!    every actor and shuts them down.
//!
//! Each actor processes one request at a time, so an engine is never observed
//! mid-update. Actors run in parallel with each other.
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p restaurant-service
//! RESTAURANT_CONFIG=restaurant.toml RUST_LOG=debug cargo run -p restaurant-service
//! ```

pub mod clients;
pub mod customer_actor;
pub mod dispatch_actor;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod route_actor;
