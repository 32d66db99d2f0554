//! # Engine Actor
//!
//! The server half of the actor pair. An `EngineActor` owns one engine and the
//! receiving end of its channel, and processes requests strictly one after
//! another. No request observes another half-way through, which is the only
//! exclusion the engines need.

use super::client::EngineClient;
use super::engine::Engine;
use super::message::EngineRequest;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Hosts a single engine inside a Tokio task.
///
/// # Usage Pattern
///
/// 1. **Create**: `EngineActor::new(engine, buffer)` returns the actor and a client.
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Stop**: drop every client; the loop ends once the channel is closed.
///
/// ```rust
/// use restaurant_core::inventory::InventoryTable;
/// use restaurant_service::framework::EngineActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = EngineActor::new(InventoryTable::default(), 8);
///     let handle = tokio::spawn(actor.run());
///
///     let stock = client.snapshot().await.unwrap();
///     assert!(stock.is_empty());
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct EngineActor<E: Engine> {
    receiver: mpsc::Receiver<EngineRequest<E>>,
    engine: E,
}

impl<E: Engine> EngineActor<E> {
    /// Creates the actor around `engine` together with its client.
    ///
    /// `buffer_size` bounds the channel; once it is full, callers wait for room.
    pub fn new(engine: E, buffer_size: usize) -> (Self, EngineClient<E>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, engine };
        (actor, EngineClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        let engine = E::NAME;
        info!(engine, "Actor started");
        let mut handled: u64 = 0;

        while let Some(request) = self.receiver.recv().await {
            handled += 1;
            match request {
                EngineRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(engine, ?command, "Command");
                    let reply = self.engine.handle(command);
                    debug!(engine, ?reply, "Reply");
                    let _ = respond_to.send(Ok(reply));
                }
                EngineRequest::Snapshot { respond_to } => {
                    debug!(engine, "Snapshot");
                    let _ = respond_to.send(Ok(self.engine.snapshot()));
                }
            }
        }

        info!(engine, handled, "Shutdown");
    }
}
