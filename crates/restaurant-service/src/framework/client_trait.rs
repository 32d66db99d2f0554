//! # ActorClient Trait
//!
//! Common interface for the engine-specific clients. Provides `snapshot` on top
//! of the wrapped [`EngineClient`].

use super::{Engine, EngineClient, ServiceError};
use async_trait::async_trait;

/// Implemented by every engine-specific client.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<InventoryTable> for InventoryClient {
///     type Error = InventoryError;
///
///     fn inner(&self) -> &EngineClient<InventoryTable> {
///         &self.inner
///     }
///
///     fn map_error(e: ServiceError) -> Self::Error {
///         InventoryError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // snapshot() comes for free
/// let stock = inventory_client.snapshot().await?;
/// ```
#[async_trait]
pub trait ActorClient<E: Engine>: Send + Sync {
    /// The engine-specific error type.
    type Error: Send + Sync;

    /// Access the wrapped generic client.
    fn inner(&self) -> &EngineClient<E>;

    /// Map plumbing failures into the engine-specific error type.
    fn map_error(e: ServiceError) -> Self::Error;

    /// Copy of every record the engine holds.
    #[tracing::instrument(skip(self), fields(engine = E::NAME))]
    async fn snapshot(&self) -> Result<E::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
