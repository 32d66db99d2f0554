//! Commands for the dispatch actor.

use super::error::DispatchError;
use restaurant_core::order::{Order, OrderCreate, OrderId, OrderState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum DispatchCommand {
    /// Creates a new order from the payload and queues it.
    Place(OrderCreate),
    /// Queues an order built elsewhere. Only `Created` orders are accepted.
    Admit(Order),
    Peek,
    /// Hands the next order to the kitchen. The order stays on record.
    Extract,
    Status,
    /// Moves a queued or dispatched order to `target`.
    Transition { id: OrderId, target: OrderState },
    Lookup(OrderId),
    /// Orders that have left the queue, by id.
    History,
}

/// Replies to [`DispatchCommand`] - variants match 1:1.
#[derive(Debug, Clone)]
pub enum DispatchReply {
    Place(Result<OrderId, DispatchError>),
    Admit(Result<(), DispatchError>),
    Peek(Option<Order>),
    Extract(Option<Order>),
    Status(QueueStatus),
    /// The order after the transition.
    Transition(Result<Order, DispatchError>),
    Lookup(Option<Order>),
    History(Vec<Order>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub queued: usize,
    pub capacity: usize,
}
