//! # Priority Dispatcher
//!
//! A bounded binary max-heap that hands the kitchen its next order. Higher
//! `priority` goes first; equal priorities leave in admission order.
//!
//! Only freshly created orders may enter, and a full dispatcher turns new
//! orders away instead of growing. Both refusals hand the order back to the
//! caller inside [`Rejected`].
//!
//! A queued order may still move through its lifecycle (see
//! [`Dispatcher::get_mut`]); its priority is fixed, so its place in the heap
//! never changes. Orders that reach a terminal state while queued are taken
//! out with [`Dispatcher::remove`].

use crate::config::EngineConfig;
use crate::order::{Order, OrderId, OrderState};
use std::cmp::Reverse;
use thiserror::Error;
use tracing::{debug, warn};

/// Why an order was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Order is {0}, only Created orders can be queued")]
    NotCreated(OrderState),

    #[error("Dispatcher is full ({capacity} orders)")]
    Full { capacity: usize },
}

/// A refused admission. Carries the order so the caller keeps ownership.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Order {} rejected: {reason}", .order.id())]
pub struct Rejected {
    pub order: Order,
    pub reason: RejectReason,
}

#[derive(Debug, Clone)]
struct Queued {
    sequence: u64,
    order: Order,
}

impl Queued {
    /// Heap rank: priority first, then earlier admission.
    fn rank(&self) -> (i32, Reverse<u64>) {
        (self.order.priority(), Reverse(self.sequence))
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    heap: Vec<Queued>,
    capacity: usize,
    next_sequence: u64,
}

impl Dispatcher {
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "dispatcher capacity must be positive");
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_orders)
    }

    /// Queues `order` for the kitchen.
    ///
    /// # Errors
    /// Returns the order inside [`Rejected`] when it is not in
    /// [`OrderState::Created`] or the dispatcher already holds `capacity` orders.
    pub fn admit(&mut self, order: Order) -> Result<(), Rejected> {
        if !order.state().is_initial() {
            let reason = RejectReason::NotCreated(order.state());
            debug!(order_id = %order.id(), %reason, "Admission refused");
            return Err(Rejected { order, reason });
        }
        if self.is_full() {
            let reason = RejectReason::Full {
                capacity: self.capacity,
            };
            warn!(
                order_id = %order.id(),
                capacity = self.capacity,
                "Dispatcher full, order rejected"
            );
            return Err(Rejected { order, reason });
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Queued { sequence, order });
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    pub fn peek_highest(&self) -> Option<&Order> {
        self.heap.first().map(|queued| &queued.order)
    }

    pub fn extract_highest(&mut self) -> Option<Order> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        self.sift_down(0);
        Some(top.order)
    }

    /// The queued order with `id`.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.iter().find(|order| order.id() == id)
    }

    /// Mutable access to a queued order, for lifecycle transitions.
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.heap
            .iter_mut()
            .map(|queued| &mut queued.order)
            .find(|order| order.id() == id)
    }

    /// Takes the order with `id` out of the queue, wherever it sits.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let index = self.heap.iter().position(|queued| queued.order.id() == id)?;
        let removed = self.heap.swap_remove(index);
        if index < self.heap.len() {
            self.sift_down(index);
            self.sift_up(index);
        }
        debug!(order_id = %id, "Order removed from queue");
        Some(removed.order)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Queued orders in heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.heap.iter().map(|queued| &queued.order)
    }

    /// Copy of the queue sorted the way [`Dispatcher::extract_highest`] would
    /// drain it. The dispatcher itself is left untouched.
    pub fn by_priority(&self) -> Vec<Order> {
        let mut queued: Vec<&Queued> = self.heap.iter().collect();
        queued.sort_by_key(|q| Reverse(q.rank()));
        queued.into_iter().map(|q| q.order.clone()).collect()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].rank() <= self.heap[parent].rank() {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;
            if left < len && self.heap[left].rank() > self.heap[largest].rank() {
                largest = left;
            }
            if right < len && self.heap[right].rank() > self.heap[largest].rank() {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.heap.swap(index, largest);
            index = largest;
        }
    }
}
