//! Customer records kept in an AVL-balanced index keyed by [`CustomerId`].

mod avl;
mod record;

pub use avl::{BalancedIndex, Inorder};
pub use record::*;

use tracing::{debug, info};

/// The customer directory: customers ordered by id.
pub type CustomerIndex = BalancedIndex<CustomerId, CustomerRecord>;

impl BalancedIndex<CustomerId, CustomerRecord> {
    /// Adds a customer under its own id. Returns `false` if the id is taken.
    pub fn register(&mut self, record: CustomerRecord) -> bool {
        let id = record.id;
        let inserted = self.insert(id, record);
        if inserted {
            info!(customer_id = %id, "Customer registered");
        } else {
            debug!(customer_id = %id, "Customer already registered");
        }
        inserted
    }

    /// Credits loyalty points. Returns the new tier, or `None` for an unknown id.
    pub fn add_loyalty_points(&mut self, id: CustomerId, points: u32) -> Option<MembershipTier> {
        let record = self.get_mut(&id)?;
        let before = record.tier();
        let after = record.add_loyalty_points(points);
        if after != before {
            info!(customer_id = %id, from = %before, to = %after, "Membership tier changed");
        }
        Some(after)
    }

    /// Owned copy of every record, in ascending id order.
    pub fn records(&self) -> Vec<CustomerRecord> {
        self.inorder().map(|(_, record)| record.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: u32) -> CustomerRecord {
        CustomerRecord::new(CustomerId(id), format!("Guest {id}"), "555-0000", "guest@example.com")
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut index = CustomerIndex::new();
        assert!(index.register(customer(1)));
        let mut other = customer(1);
        other.name = "Impostor".to_string();
        assert!(!index.register(other));
        assert_eq!(index.search(&CustomerId(1)).map(|c| c.name.as_str()), Some("Guest 1"));
    }

    #[test]
    fn test_loyalty_points_change_tier() {
        let mut index = CustomerIndex::new();
        index.register(customer(3));
        assert_eq!(
            index.add_loyalty_points(CustomerId(3), 1500),
            Some(MembershipTier::Silver)
        );
        assert_eq!(index.add_loyalty_points(CustomerId(99), 10), None);
    }

    #[test]
    fn test_records_are_ordered() {
        let mut index = CustomerIndex::new();
        for id in [8, 2, 5] {
            index.register(customer(id));
        }
        let ids: Vec<_> = index.records().into_iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 5, 8]);
    }
}
