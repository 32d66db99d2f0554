//! # Customer Actor
//!
//! Hosts the customer [`CustomerIndex`] (an AVL-balanced index keyed by
//! [`CustomerId`](restaurant_core::customers::CustomerId)).
//!
//! - [`actions`] - [`CustomerCommand`] and [`CustomerReply`]
//! - [`error`] - [`CustomerError`] returned by [`CustomerClient`](crate::clients::CustomerClient)
//! - [`new()`] - factory for the actor and its client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{EngineActor, EngineClient};
use restaurant_core::customers::CustomerIndex;

/// Creates an empty customer index and the actor hosting it.
pub fn new() -> (EngineActor<CustomerIndex>, EngineClient<CustomerIndex>) {
    EngineActor::new(CustomerIndex::new(), 32)
}
