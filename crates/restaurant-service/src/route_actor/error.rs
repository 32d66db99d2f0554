//! Error types for the route actor.

use restaurant_core::RouteError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteServiceError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Unknown location: {0}")]
    UnknownLocation(usize),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
