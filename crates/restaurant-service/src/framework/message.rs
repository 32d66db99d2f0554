//! # Engine Messages
//!
//! The envelope sent from an [`EngineClient`](super::EngineClient) to an
//! [`EngineActor`](super::EngineActor).

use super::engine::Engine;
use super::error::ServiceError;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, ServiceError>>;

/// A request to an engine actor.
///
/// `Command` forwards an engine-specific operation; `Snapshot` asks for a copy
/// of the engine's records without changing anything.
#[derive(Debug)]
pub enum EngineRequest<E: Engine> {
    Command {
        command: E::Command,
        respond_to: Response<E::Reply>,
    },
    Snapshot {
        respond_to: Response<E::Snapshot>,
    },
}
