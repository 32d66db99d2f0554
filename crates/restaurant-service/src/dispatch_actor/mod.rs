//! # Dispatch Actor
//!
//! Hosts the kitchen's priority [`Dispatcher`](restaurant_core::dispatch::Dispatcher)
//! inside a [`Kitchen`], which also hands out order ids.
//!
//! ```rust,ignore
//! let id = dispatch_client.place_order(params).await?;
//! if let Some(next) = dispatch_client.extract_highest().await? {
//!     dispatch_client.transition(next.id(), OrderState::Confirmed).await?;
//! }
//! ```
//!
//! Orders are kept after they leave the queue; see [`Kitchen`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::Kitchen;
pub use error::*;

use crate::framework::{EngineActor, EngineClient};
use restaurant_core::dispatch::Dispatcher;
use restaurant_core::EngineConfig;

/// Creates an empty kitchen queue bounded by `config.max_orders`.
pub fn new(config: &EngineConfig) -> (EngineActor<Kitchen>, EngineClient<Kitchen>) {
    EngineActor::new(Kitchen::new(Dispatcher::from_config(config)), 32)
}
