use super::actions::{InventoryCommand, InventoryReply, ReductionOutcome};
use crate::framework::Engine;
use restaurant_core::inventory::{InventoryTable, StockEntry};

impl Engine for InventoryTable {
    const NAME: &'static str = "inventory";

    type Command = InventoryCommand;
    type Reply = InventoryReply;
    type Snapshot = Vec<StockEntry>;

    fn handle(&mut self, command: InventoryCommand) -> InventoryReply {
        match command {
            InventoryCommand::Stock { name, record } => {
                InventoryReply::Stock(self.insert(name, record))
            }
            InventoryCommand::Retrieve(name) => {
                InventoryReply::Retrieve(self.retrieve(&name).cloned())
            }
            InventoryCommand::Reduce { name, amount } => {
                let outcome = match self.retrieve(&name).map(|r| r.quantity) {
                    None => ReductionOutcome::Unknown,
                    Some(available) => {
                        if self.reduce_quantity(&name, amount) {
                            ReductionOutcome::Reduced {
                                remaining: available - amount,
                            }
                        } else {
                            ReductionOutcome::Insufficient { available }
                        }
                    }
                };
                InventoryReply::Reduce(outcome)
            }
            InventoryCommand::Restock { name, amount } => {
                InventoryReply::Restock(self.restock(&name, amount))
            }
            InventoryCommand::LowStock => InventoryReply::LowStock(self.low_stock()),
        }
    }

    fn snapshot(&self) -> Vec<StockEntry> {
        self.stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restaurant_core::inventory::InventoryRecord;

    fn reduce(table: &mut InventoryTable, amount: u32) -> ReductionOutcome {
        match table.handle(InventoryCommand::Reduce {
            name: "rice".to_string(),
            amount,
        }) {
            InventoryReply::Reduce(outcome) => outcome,
            other => panic!("Unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_reduce_outcomes() {
        let mut table = InventoryTable::default();
        assert_eq!(reduce(&mut table, 1), ReductionOutcome::Unknown);

        table.insert("rice", InventoryRecord::new(5, "kg", 3.0, 1));
        assert_eq!(
            reduce(&mut table, 10),
            ReductionOutcome::Insufficient { available: 5 }
        );
        assert_eq!(reduce(&mut table, 2), ReductionOutcome::Reduced { remaining: 3 });
        assert_eq!(table.retrieve("rice").map(|r| r.quantity), Some(3));
    }
}
