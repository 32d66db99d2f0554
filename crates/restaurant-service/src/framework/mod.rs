//! # Engine Hosting
//!
//! Runs each synchronous engine from `restaurant-core` inside its own Tokio
//! task and talks to it by message passing.
//!
//! ## Layers
//!
//! 1. **Engine** ([`Engine`]) - the command/reply contract an engine fulfils.
//! 2. **Runtime** ([`EngineActor`]) - owns the engine, processes requests one at a time.
//! 3. **Interface** ([`EngineClient`]) - cloneable async handle used by callers.
//!
//! An engine is owned by exactly one actor and is never shared, so no engine
//! needs a lock. Actors never call one another.
//!
//! ## Testing
//!
//! [`mock`] provides [`MockClient`](mock::MockClient) and raw-channel helpers
//! for testing client wrappers without running an engine.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod engine;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::EngineActor;
pub use client::EngineClient;
pub use client_trait::ActorClient;
pub use engine::Engine;
pub use error::ServiceError;
pub use message::{EngineRequest, Response};
