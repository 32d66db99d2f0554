//! # Engine Client
//!
//! The caller half of the actor pair.

use super::engine::Engine;
use super::error::ServiceError;
use super::message::EngineRequest;
use tokio::sync::{mpsc, oneshot};

/// Typed handle for sending requests to an [`EngineActor`](super::EngineActor).
///
/// Holds only a channel sender, so clones are cheap and can be handed to any
/// number of tasks. The actor stops once the last clone is dropped.
pub struct EngineClient<E: Engine> {
    sender: mpsc::Sender<EngineRequest<E>>,
}

// Manual impl: a derive would demand `E: Clone`, and engines are not cloned.
impl<E: Engine> Clone for EngineClient<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E: Engine> EngineClient<E> {
    pub fn new(sender: mpsc::Sender<EngineRequest<E>>) -> Self {
        Self { sender }
    }

    /// Sends one command and waits for the engine's reply.
    pub async fn send(&self, command: E::Command) -> Result<E::Reply, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EngineRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response.await.map_err(|_| ServiceError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<E::Snapshot, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EngineRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response.await.map_err(|_| ServiceError::ActorDropped)?
    }
}
