//! # Engine Clients
//!
//! Typed wrappers over [`EngineClient`](crate::framework::EngineClient), one per
//! engine. Each turns command/reply pairs into plain async methods and maps
//! domain rejections to its engine's error type.

pub mod customer_client;
pub mod dispatch_client;
pub mod inventory_client;
pub mod route_client;

pub use crate::framework::ActorClient;
pub use customer_client::CustomerClient;
pub use dispatch_client::DispatchClient;
pub use inventory_client::InventoryClient;
pub use route_client::RouteClient;
