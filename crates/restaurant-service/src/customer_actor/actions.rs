//! Commands for the customer actor.
//!
//! Handled by [`impl Engine for CustomerIndex`](super::entity).

use restaurant_core::customers::{CustomerId, CustomerRecord, MembershipTier};

#[derive(Debug, Clone)]
pub enum CustomerCommand {
    /// Adds a customer under its own id; an existing id is left untouched.
    Register(CustomerRecord),
    Lookup(CustomerId),
    AddLoyaltyPoints { id: CustomerId, points: u32 },
}

/// Replies to [`CustomerCommand`] - variants match 1:1.
#[derive(Debug, Clone)]
pub enum CustomerReply {
    /// `false` if the id was already taken.
    Register(bool),
    Lookup(Option<CustomerRecord>),
    /// The customer's tier after the credit, `None` for an unknown id.
    AddLoyaltyPoints(Option<MembershipTier>),
}
