use serde::{Deserialize, Serialize};

/// Stock held for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub quantity: u32,
    pub unit: String,
    pub cost_per_unit: f64,
    /// At or below this quantity the ingredient should be reordered.
    pub reorder_threshold: u32,
}

impl InventoryRecord {
    pub fn new(
        quantity: u32,
        unit: impl Into<String>,
        cost_per_unit: f64,
        reorder_threshold: u32,
    ) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            cost_per_unit,
            reorder_threshold,
        }
    }

    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_threshold
    }

    /// Value of the stock on hand.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.cost_per_unit
    }
}

/// An ingredient name paired with its record, as listed in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    #[serde(flatten)]
    pub record: InventoryRecord,
}
