//! # Route Actor
//!
//! Hosts the delivery [`RouteGraph`]. The graph is sized once, when the system
//! starts, and never grows.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{EngineActor, EngineClient};
use restaurant_core::routes::RouteGraph;
use restaurant_core::{EngineConfig, RouteError};

/// Creates a graph of `locations` unconnected locations.
///
/// # Errors
/// [`RouteError::TooManyLocations`] if `locations` exceeds `config.max_locations`.
pub fn new(
    config: &EngineConfig,
    locations: usize,
) -> Result<(EngineActor<RouteGraph>, EngineClient<RouteGraph>), RouteError> {
    let graph = RouteGraph::from_config(locations, config)?;
    Ok(EngineActor::new(graph, 32))
}
