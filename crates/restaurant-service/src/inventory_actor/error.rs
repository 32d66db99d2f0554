//! Error types for the inventory actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock of {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Restock of {0} refused")]
    RestockRefused(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
