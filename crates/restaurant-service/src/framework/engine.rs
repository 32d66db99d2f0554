//! # Engine Trait
//!
//! The contract an engine fulfils to be hosted by an [`EngineActor`](super::EngineActor).
//!
//! Engines are plain synchronous structures. The actor owns exactly one of them
//! and feeds it commands one at a time, so an engine never has to think about
//! concurrent access.
//!
//! Each engine declares its own command and reply enums. A command is a
//! request for one operation; the reply carries that operation's outcome,
//! including domain rejections such as "insufficient stock". Rejections are
//! data here, not errors: the actor itself only fails when the channel does.

use std::fmt::Debug;

pub trait Engine: Send + 'static {
    /// Short name used in log lines (e.g. `"inventory"`).
    const NAME: &'static str;

    /// Requests this engine understands.
    type Command: Send + Debug;

    /// Outcome of a command.
    type Reply: Send + Debug;

    /// Owned, flat copy of the engine's records.
    type Snapshot: Send + Debug;

    /// Runs one command to completion.
    fn handle(&mut self, command: Self::Command) -> Self::Reply;

    fn snapshot(&self) -> Self::Snapshot;
}
