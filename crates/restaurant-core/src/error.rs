//! Error types for the engines.

use thiserror::Error;

/// Errors raised while building an [`Order`](crate::order::Order).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order carries more line items than a ticket can hold.
    #[error("Too many line items: {count} (at most {max})")]
    TooManyItems { count: usize, max: usize },

    /// The total is negative or not a finite number.
    #[error("Invalid order total: {0}")]
    InvalidTotal(f64),
}

/// Errors raised by the delivery [`RouteGraph`](crate::routes::RouteGraph).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Shortest-path search depends on non-negative weights.
    #[error("Negative weight {weight} on edge {from} - {to}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },

    /// The graph would hold more locations than configured.
    #[error("Too many locations: {requested} (at most {max})")]
    TooManyLocations { requested: usize, max: usize },
}

/// An order state name that does not match any lifecycle state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown order state: {0}")]
pub struct ParseStateError(pub String);
