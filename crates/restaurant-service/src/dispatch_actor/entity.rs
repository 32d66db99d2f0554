use super::actions::{DispatchCommand, DispatchReply, QueueStatus};
use super::error::DispatchError;
use crate::framework::Engine;
use restaurant_core::dispatch::Dispatcher;
use restaurant_core::order::{Order, OrderCreate, OrderId, OrderState};
use std::collections::BTreeMap;
use tracing::info;

/// The kitchen: a [`Dispatcher`] for waiting orders, a record of every order
/// that has left it, and the counter that numbers new orders.
///
/// Orders are never deleted. Extracted orders and orders cancelled while
/// waiting move to the history, where they keep moving through their
/// lifecycle until they reach a terminal state.
#[derive(Debug)]
pub struct Kitchen {
    dispatcher: Dispatcher,
    history: BTreeMap<OrderId, Order>,
    next_id: u32,
}

impl Kitchen {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::starting_at(dispatcher, 1)
    }

    /// A kitchen that numbers its orders from `first_id`.
    pub fn starting_at(dispatcher: Dispatcher, first_id: u32) -> Self {
        Self {
            dispatcher,
            history: BTreeMap::new(),
            next_id: first_id,
        }
    }

    fn is_known(&self, id: OrderId) -> bool {
        self.dispatcher.get(id).is_some() || self.history.contains_key(&id)
    }

    /// The lowest free id at or above the counter.
    fn allocate_id(&self) -> Result<OrderId, DispatchError> {
        let mut candidate = self.next_id;
        while self.is_known(OrderId(candidate)) {
            candidate = candidate.checked_add(1).ok_or(DispatchError::IdsExhausted)?;
        }
        Ok(OrderId(candidate))
    }

    fn place(&mut self, params: OrderCreate) -> Result<OrderId, DispatchError> {
        let id = self.allocate_id()?;
        let order = Order::new(id, params)?;
        self.dispatcher.admit(order)?;
        // Ids are consumed only by orders that made it into the queue. The
        // counter stays put at u32::MAX; allocate_id then finds it taken.
        self.next_id = id.0.saturating_add(1);
        Ok(id)
    }

    fn admit(&mut self, order: Order) -> Result<(), DispatchError> {
        if self.is_known(order.id()) {
            return Err(DispatchError::DuplicateOrder(order.id()));
        }
        Ok(self.dispatcher.admit(order)?)
    }

    fn extract(&mut self) -> Option<Order> {
        let order = self.dispatcher.extract_highest()?;
        self.history.insert(order.id(), order.clone());
        Some(order)
    }

    fn transition(&mut self, id: OrderId, target: OrderState) -> Result<Order, DispatchError> {
        let order = match self.dispatcher.get_mut(id) {
            Some(order) => order,
            None => self
                .history
                .get_mut(&id)
                .ok_or(DispatchError::UnknownOrder(id))?,
        };
        let from = order.state();
        if !order.try_transition(target) {
            return Err(DispatchError::TransitionRefused {
                id,
                from,
                to: target,
            });
        }
        let updated = order.clone();

        if target.is_terminal() {
            if let Some(retired) = self.dispatcher.remove(id) {
                info!(order_id = %id, state = %target, "Order left the queue");
                self.history.insert(id, retired);
            }
        }
        Ok(updated)
    }

    fn lookup(&self, id: OrderId) -> Option<Order> {
        self.dispatcher
            .get(id)
            .or_else(|| self.history.get(&id))
            .cloned()
    }
}

impl Engine for Kitchen {
    const NAME: &'static str = "dispatch";

    type Command = DispatchCommand;
    type Reply = DispatchReply;
    type Snapshot = Vec<Order>;

    fn handle(&mut self, command: DispatchCommand) -> DispatchReply {
        match command {
            DispatchCommand::Place(params) => DispatchReply::Place(self.place(params)),
            DispatchCommand::Admit(order) => DispatchReply::Admit(self.admit(order)),
            DispatchCommand::Peek => DispatchReply::Peek(self.dispatcher.peek_highest().cloned()),
            DispatchCommand::Extract => DispatchReply::Extract(self.extract()),
            DispatchCommand::Status => DispatchReply::Status(QueueStatus {
                queued: self.dispatcher.len(),
                capacity: self.dispatcher.capacity(),
            }),
            DispatchCommand::Transition { id, target } => {
                DispatchReply::Transition(self.transition(id, target))
            }
            DispatchCommand::Lookup(id) => DispatchReply::Lookup(self.lookup(id)),
            DispatchCommand::History => {
                DispatchReply::History(self.history.values().cloned().collect())
            }
        }
    }

    /// Waiting orders in dispatch order.
    fn snapshot(&self) -> Vec<Order> {
        self.dispatcher.by_priority()
    }
}
