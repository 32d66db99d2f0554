//! Orders and the lifecycle state machine that governs them.

mod model;
mod state;

pub use model::*;
pub use state::*;
