//! # Restaurant Core
//!
//! In-memory engines behind a single restaurant's operations: who the customers
//! are, which order the kitchen picks up next, what is left in the pantry and
//! how the delivery riders get around.
//!
//! ## Engines
//!
//! - [`order`] - The [`Order`](order::Order) record and its lifecycle state machine.
//! - [`customers`] - An AVL-balanced [`BalancedIndex`](customers::BalancedIndex) for
//!   customer lookup.
//! - [`dispatch`] - A bounded max-heap [`Dispatcher`](dispatch::Dispatcher) for kitchen ordering.
//! - [`inventory`] - A resizable open-addressing [`DynamicTable`](inventory::DynamicTable)
//!   for stock.
//! - [`routes`] - A weighted undirected [`RouteGraph`](routes::RouteGraph) for delivery planning.
//!
//! Every engine owns its storage outright and runs each operation to completion.
//! None of them locks or spawns anything; hosting them behind a task or a mutex is
//! the caller's business (see the `restaurant-service` crate).
//!
//! ## Rejections vs. errors
//!
//! Operations the domain expects to refuse (an illegal transition, a reduction
//! below zero, a full dispatcher) report it through their return value and leave
//! the engine untouched. Typed errors are reserved for construction and loading
//! ([`ConfigError`](config::ConfigError), [`OrderError`], [`RouteError`]).
//! Passing a location index outside the graph is a caller bug and panics.
//!
//! ## Logging
//!
//! Engines emit `tracing` events (state transitions, table resizes, heap-full
//! rejections). Installing a subscriber is left to the binary.

pub mod config;
pub mod customers;
pub mod dispatch;
pub mod error;
pub mod inventory;
pub mod order;
pub mod routes;

pub use config::{ConfigError, EngineConfig};
pub use error::{OrderError, ParseStateError, RouteError};
