//! Commands for the inventory actor.

use restaurant_core::inventory::{InventoryRecord, StockEntry};

#[derive(Debug, Clone)]
pub enum InventoryCommand {
    /// Inserts or replaces the record for an ingredient.
    Stock { name: String, record: InventoryRecord },
    Retrieve(String),
    /// Takes units out of stock. Refused when the stock cannot cover it.
    Reduce { name: String, amount: u32 },
    Restock { name: String, amount: u32 },
    LowStock,
}

/// Replies to [`InventoryCommand`] - variants match 1:1.
#[derive(Debug, Clone)]
pub enum InventoryReply {
    /// The record that was replaced, if any.
    Stock(Option<InventoryRecord>),
    Retrieve(Option<InventoryRecord>),
    Reduce(ReductionOutcome),
    /// `false` for an unknown ingredient or a quantity overflow.
    Restock(bool),
    LowStock(Vec<StockEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionOutcome {
    Reduced { remaining: u32 },
    Insufficient { available: u32 },
    Unknown,
}
