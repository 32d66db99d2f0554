use super::OrderState;
use crate::customers::CustomerId;
use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::SystemTime;
use tracing::{info, warn};

/// A ticket holds at most this many line items.
pub const MAX_LINE_ITEMS: usize = 20;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub table: u32,
    pub items: Vec<String>,
    pub total: f64,
    pub priority: i32,
}

/// A customer order moving through the kitchen.
///
/// Fields are private: the state changes only through [`Order::try_transition`]
/// and the total is fixed once the order exists, so neither invariant can be
/// broken from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord", into = "OrderRecord")]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    table: u32,
    items: Vec<String>,
    total: f64,
    priority: i32,
    created_at: SystemTime,
    state: OrderState,
}

impl Order {
    /// Creates a new order in [`OrderState::Created`], stamped with the current time.
    ///
    /// # Errors
    /// - [`OrderError::TooManyItems`] if more than [`MAX_LINE_ITEMS`] items are given.
    /// - [`OrderError::InvalidTotal`] if the total is negative or not finite.
    pub fn new(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Self::validate(&params.items, params.total)?;
        Ok(Self {
            id,
            customer_id: params.customer_id,
            table: params.table,
            items: params.items,
            total: params.total,
            priority: params.priority,
            created_at: SystemTime::now(),
            state: OrderState::INITIAL,
        })
    }

    fn validate(items: &[String], total: f64) -> Result<(), OrderError> {
        if items.len() > MAX_LINE_ITEMS {
            return Err(OrderError::TooManyItems {
                count: items.len(),
                max: MAX_LINE_ITEMS,
            });
        }
        if !total.is_finite() || total < 0.0 {
            return Err(OrderError::InvalidTotal(total));
        }
        Ok(())
    }

    /// Moves the order to `target` if the lifecycle allows it.
    ///
    /// Returns `false` and leaves the order untouched otherwise. A refused
    /// transition is a caller bug, not a failure of the order.
    pub fn try_transition(&mut self, target: OrderState) -> bool {
        if !self.state.can_transition_to(target) {
            warn!(order_id = %self.id, from = %self.state, to = %target, "Transition refused");
            return false;
        }
        info!(order_id = %self.id, from = %self.state, to = %target, "Transition");
        self.state = target;
        true
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn table(&self) -> u32 {
        self.table
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn state(&self) -> OrderState {
        self.state
    }
}

/// Flat row form of an [`Order`], as written by snapshot collaborators.
///
/// Reading a row back goes through the same validation as [`Order::new`]; the
/// stored state is kept as-is so restored orders resume where they left off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub table: u32,
    pub items: Vec<String>,
    pub total: f64,
    pub priority: i32,
    pub state: OrderState,
    pub created_at: SystemTime,
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrderError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Order::validate(&record.items, record.total)?;
        Ok(Self {
            id: record.id,
            customer_id: record.customer_id,
            table: record.table,
            items: record.items,
            total: record.total,
            priority: record.priority,
            created_at: record.created_at,
            state: record.state,
        })
    }
}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            table: order.table,
            items: order.items,
            total: order.total,
            priority: order.priority,
            state: order.state,
            created_at: order.created_at,
        }
    }
}
