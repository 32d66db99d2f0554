use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers, and the key of the customer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Membership level earned through loyalty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MembershipTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MembershipTier {
    pub const SILVER_POINTS: u32 = 1000;
    pub const GOLD_POINTS: u32 = 3000;
    pub const PLATINUM_POINTS: u32 = 5000;

    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= Self::PLATINUM_POINTS => MembershipTier::Platinum,
            p if p >= Self::GOLD_POINTS => MembershipTier::Gold,
            p if p >= Self::SILVER_POINTS => MembershipTier::Silver,
            _ => MembershipTier::Bronze,
        }
    }

    /// Fraction taken off a bill for members of this tier.
    pub fn discount_rate(self) -> f64 {
        match self {
            MembershipTier::Bronze => 0.05,
            MembershipTier::Silver => 0.10,
            MembershipTier::Gold => 0.15,
            MembershipTier::Platinum => 0.20,
        }
    }
}

impl Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MembershipTier::Bronze => "Bronze",
            MembershipTier::Silver => "Silver",
            MembershipTier::Gold => "Gold",
            MembershipTier::Platinum => "Platinum",
        };
        f.write_str(name)
    }
}

/// A registered customer.
///
/// The membership tier is never stored; [`CustomerRecord::tier`] derives it
/// from the loyalty points every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub loyalty_points: u32,
}

impl CustomerRecord {
    /// Creates a new customer with no loyalty points.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            loyalty_points: 0,
        }
    }

    pub fn tier(&self) -> MembershipTier {
        MembershipTier::from_points(self.loyalty_points)
    }

    /// Credits points (saturating) and returns the resulting tier.
    pub fn add_loyalty_points(&mut self, points: u32) -> MembershipTier {
        self.loyalty_points = self.loyalty_points.saturating_add(points);
        self.tier()
    }

    /// Applies the tier discount to `amount`.
    pub fn discounted(&self, amount: f64) -> f64 {
        amount * (1.0 - self.tier().discount_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(MembershipTier::from_points(0), MembershipTier::Bronze);
        assert_eq!(MembershipTier::from_points(999), MembershipTier::Bronze);
        assert_eq!(MembershipTier::from_points(1000), MembershipTier::Silver);
        assert_eq!(MembershipTier::from_points(2999), MembershipTier::Silver);
        assert_eq!(MembershipTier::from_points(3000), MembershipTier::Gold);
        assert_eq!(MembershipTier::from_points(5000), MembershipTier::Platinum);
        assert_eq!(MembershipTier::from_points(u32::MAX), MembershipTier::Platinum);
    }

    #[test]
    fn test_points_promote_customer() {
        let mut customer =
            CustomerRecord::new(CustomerId(1), "Alice", "555-0100", "alice@example.com");
        assert_eq!(customer.tier(), MembershipTier::Bronze);
        assert_eq!(customer.add_loyalty_points(3200), MembershipTier::Gold);
        assert_eq!(customer.add_loyalty_points(u32::MAX), MembershipTier::Platinum);
        assert_eq!(customer.loyalty_points, u32::MAX);
    }

    #[test]
    fn test_discount_follows_tier() {
        let mut customer = CustomerRecord::new(CustomerId(1), "Bob", "555-0101", "bob@example.com");
        assert!((customer.discounted(100.0) - 95.0).abs() < 1e-9);
        customer.add_loyalty_points(5000);
        assert!((customer.discounted(100.0) - 80.0).abs() < 1e-9);
    }
}
