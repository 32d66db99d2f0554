//! Error types for the dispatch actor.

use restaurant_core::dispatch::{RejectReason, Rejected};
use restaurant_core::order::{Order, OrderId, OrderState};
use restaurant_core::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// The payload could not be turned into an order.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    /// The dispatcher turned the order away; the order is handed back.
    #[error(transparent)]
    Rejected(Box<Rejected>),

    /// An order with this id is already queued or on record.
    #[error("Order already known: {0}")]
    DuplicateOrder(OrderId),

    #[error("Order not found: {0}")]
    UnknownOrder(OrderId),

    #[error("Order {id} cannot move from {from} to {to}")]
    TransitionRefused {
        id: OrderId,
        from: OrderState,
        to: OrderState,
    },

    /// Every order id up to `u32::MAX` is taken.
    #[error("No order ids left")]
    IdsExhausted,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DispatchError {
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            DispatchError::Rejected(rejected) => Some(rejected.reason),
            _ => None,
        }
    }

    /// The rejected order, if the dispatcher returned one.
    pub fn into_order(self) -> Option<Order> {
        match self {
            DispatchError::Rejected(rejected) => Some(rejected.order),
            _ => None,
        }
    }
}

impl From<Rejected> for DispatchError {
    fn from(rejected: Rejected) -> Self {
        DispatchError::Rejected(Box::new(rejected))
    }
}
