//! Ingredient stock kept in a [`DynamicTable`] keyed by ingredient name.

mod record;
mod table;

pub use record::*;
pub use table::*;

use tracing::{debug, info, warn};

pub type InventoryTable = DynamicTable<InventoryRecord>;

impl DynamicTable<InventoryRecord> {
    /// Takes `amount` units of `name` out of stock.
    ///
    /// Returns `false` and changes nothing if the ingredient is unknown or
    /// holds fewer than `amount` units.
    pub fn reduce_quantity(&mut self, name: &str, amount: u32) -> bool {
        let Some(record) = self.get_mut(name) else {
            debug!(ingredient = name, "Reduction for unknown ingredient");
            return false;
        };
        if amount > record.quantity {
            warn!(
                ingredient = name,
                requested = amount,
                available = record.quantity,
                "Insufficient stock"
            );
            return false;
        }
        record.quantity -= amount;
        if record.needs_reorder() {
            info!(ingredient = name, remaining = record.quantity, "Stock at reorder level");
        }
        true
    }

    /// Adds `amount` units to `name`. Returns `false` for an unknown
    /// ingredient or if the quantity would overflow.
    pub fn restock(&mut self, name: &str, amount: u32) -> bool {
        let Some(record) = self.get_mut(name) else {
            return false;
        };
        match record.quantity.checked_add(amount) {
            Some(quantity) => {
                record.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Ingredients at or below their reorder threshold, sorted by name.
    pub fn low_stock(&self) -> Vec<StockEntry> {
        let mut entries: Vec<StockEntry> = self
            .iter()
            .filter(|(_, record)| record.needs_reorder())
            .map(|(name, record)| StockEntry {
                name: name.to_string(),
                record: record.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Every ingredient, sorted by name.
    pub fn stock(&self) -> Vec<StockEntry> {
        let mut entries: Vec<StockEntry> = self
            .iter()
            .map(|(name, record)| StockEntry {
                name: name.to_string(),
                record: record.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Total value of everything in stock.
    pub fn stock_value(&self) -> f64 {
        self.iter().map(|(_, record)| record.stock_value()).sum()
    }
}
