//! # Mock Clients
//!
//! Test doubles for [`EngineClient`]: they speak the same channel protocol as
//! a real actor, but no engine sits behind them.
//!
//! | | Mock | Real actor |
//! |---|---|---|
//! | **State** | none, replies are scripted | a real engine |
//! | **Determinism** | full | subject to the scheduler |
//! | **Failure injection** | `return_err` | only by closing the actor |
//! | **Use case** | logic *around* a client | the engine behind the client |
//!
//! ## Scripted replies
//!
//! [`MockClient`] answers requests from a queue of expectations, in order:
//!
//! ```rust,ignore
//! let mut mock = MockClient::<InventoryTable>::new();
//! mock.expect_command().return_ok(InventoryReply::Restock(true));
//! mock.expect_snapshot().return_err(ServiceError::ActorDropped);
//!
//! let client = InventoryClient::new(mock.client());
//! // ... exercise the client ...
//! mock.verify();
//! ```
//!
//! ## Inspecting requests
//!
//! [`create_mock_client`] hands back the raw receiver, so a test can look at
//! the command a client produced and answer it by hand:
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<InventoryTable>(10);
//! let task = tokio::spawn(async move { InventoryClient::new(client).restock("flour", 5).await });
//!
//! let (command, responder) = expect_command(&mut receiver).await.unwrap();
//! assert!(matches!(command, InventoryCommand::Restock { amount: 5, .. }));
//! responder.send(Ok(InventoryReply::Restock(true))).unwrap();
//! ```

use super::client::EngineClient;
use super::engine::Engine;
use super::error::ServiceError;
use super::message::{EngineRequest, Response};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

enum Expectation<E: Engine> {
    Command {
        response: Result<E::Reply, ServiceError>,
    },
    Snapshot {
        response: Result<E::Snapshot, ServiceError>,
    },
}

type Expectations<E> = Arc<Mutex<VecDeque<Expectation<E>>>>;

fn lock<E: Engine>(expectations: &Expectations<E>) -> MutexGuard<'_, VecDeque<Expectation<E>>> {
    expectations
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A client whose replies come from a queue of expectations.
///
/// A request that does not match the next expectation gets no answer (the
/// caller sees [`ServiceError::ActorDropped`]) and is counted; [`MockClient::verify`]
/// then fails the test.
pub struct MockClient<E: Engine> {
    client: EngineClient<E>,
    expectations: Expectations<E>,
    mismatches: Arc<AtomicUsize>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<E: Engine> Default for MockClient<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> MockClient<E> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<EngineRequest<E>>(100);
        let expectations: Expectations<E> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(AtomicUsize::new(0));

        let queue = expectations.clone();
        let misses = mismatches.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                match (request, expectation) {
                    (
                        EngineRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        EngineRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        misses.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
        });

        Self {
            client: EngineClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> EngineClient<E> {
        self.client.clone()
    }

    /// Expects the next request to be a command.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<E> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects the next request to be a snapshot.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<E> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let mismatches = self.mismatches.load(Ordering::SeqCst);
        assert_eq!(mismatches, 0, "{mismatches} request(s) did not match an expectation");
        let remaining = lock(&self.expectations).len();
        assert_eq!(remaining, 0, "Not all expectations were met. {remaining} remaining");
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<E: Engine> {
    expectations: Expectations<E>,
}

impl<E: Engine> CommandExpectationBuilder<E> {
    pub fn return_ok(self, reply: E::Reply) {
        lock(&self.expectations).push_back(Expectation::Command { response: Ok(reply) });
    }

    pub fn return_err(self, error: ServiceError) {
        lock(&self.expectations).push_back(Expectation::Command {
            response: Err(error),
        });
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<E: Engine> {
    expectations: Expectations<E>,
}

impl<E: Engine> SnapshotExpectationBuilder<E> {
    pub fn return_ok(self, snapshot: E::Snapshot) {
        lock(&self.expectations).push_back(Expectation::Snapshot {
            response: Ok(snapshot),
        });
    }

    pub fn return_err(self, error: ServiceError) {
        lock(&self.expectations).push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<E: Engine>(
    buffer_size: usize,
) -> (EngineClient<E>, mpsc::Receiver<EngineRequest<E>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (EngineClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a command.
pub async fn expect_command<E: Engine>(
    receiver: &mut mpsc::Receiver<EngineRequest<E>>,
) -> Option<(E::Command, Response<E::Reply>)> {
    match receiver.recv().await {
        Some(EngineRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a snapshot.
pub async fn expect_snapshot<E: Engine>(
    receiver: &mut mpsc::Receiver<EngineRequest<E>>,
) -> Option<Response<E::Snapshot>> {
    match receiver.recv().await {
        Some(EngineRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
