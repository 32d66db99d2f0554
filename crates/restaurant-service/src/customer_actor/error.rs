//! Error types for the customer actor.

use restaurant_core::customers::CustomerId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),

    #[error("Customer already registered: {0}")]
    AlreadyRegistered(CustomerId),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
