//! # Inventory Actor
//!
//! Hosts the ingredient [`InventoryTable`], an open-addressing hash table
//! keyed by ingredient name.
//!
//! ## Reductions
//!
//! A reduction that the stock cannot cover is refused and leaves the quantity
//! as it was. [`InventoryClient::reduce`](crate::clients::InventoryClient::reduce)
//! reports it as [`InventoryError::InsufficientStock`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{EngineActor, EngineClient};
use restaurant_core::inventory::InventoryTable;
use restaurant_core::EngineConfig;

/// Creates an empty inventory table sized by `config.initial_table_size`.
pub fn new(config: &EngineConfig) -> (EngineActor<InventoryTable>, EngineClient<InventoryTable>) {
    EngineActor::new(InventoryTable::from_config(config), 32)
}
