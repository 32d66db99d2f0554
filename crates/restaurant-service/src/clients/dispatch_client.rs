//! # Dispatch Client

use crate::dispatch_actor::{DispatchCommand, DispatchError, DispatchReply, Kitchen, QueueStatus};
use crate::framework::{ActorClient, EngineClient, ServiceError};
use async_trait::async_trait;
use restaurant_core::order::{Order, OrderCreate, OrderId, OrderState};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DispatchClient {
    inner: EngineClient<Kitchen>,
}

impl DispatchClient {
    pub fn new(inner: EngineClient<Kitchen>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Kitchen> for DispatchClient {
    type Error = DispatchError;

    fn inner(&self) -> &EngineClient<Kitchen> {
        &self.inner
    }

    fn map_error(e: ServiceError) -> Self::Error {
        DispatchError::ActorCommunicationError(e.to_string())
    }
}

impl DispatchClient {
    async fn send(&self, command: DispatchCommand) -> Result<DispatchReply, DispatchError> {
        self.inner.send(command).await.map_err(Self::map_error)
    }

    fn unexpected(operation: &'static str) -> DispatchError {
        Self::map_error(ServiceError::UnexpectedReply(operation))
    }

    /// Creates an order from `params` and queues it for the kitchen.
    #[instrument(
        skip(self, params),
        fields(customer_id = %params.customer_id, priority = params.priority)
    )]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, DispatchError> {
        debug!("Sending request");
        match self.send(DispatchCommand::Place(params)).await? {
            DispatchReply::Place(result) => result,
            _ => Err(Self::unexpected("place_order")),
        }
    }

    /// Queues an existing order. A rejected order comes back inside the error.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn admit(&self, order: Order) -> Result<(), DispatchError> {
        debug!("Sending request");
        match self.send(DispatchCommand::Admit(order)).await? {
            DispatchReply::Admit(result) => result,
            _ => Err(Self::unexpected("admit")),
        }
    }

    #[instrument(skip(self))]
    pub async fn peek_highest(&self) -> Result<Option<Order>, DispatchError> {
        debug!("Sending request");
        match self.send(DispatchCommand::Peek).await? {
            DispatchReply::Peek(order) => Ok(order),
            _ => Err(Self::unexpected("peek_highest")),
        }
    }

    /// Removes and returns the next order for the kitchen.
    #[instrument(skip(self))]
    pub async fn extract_highest(&self) -> Result<Option<Order>, DispatchError> {
        debug!("Sending request");
        match self.send(DispatchCommand::Extract).await? {
            DispatchReply::Extract(order) => Ok(order),
            _ => Err(Self::unexpected("extract_highest")),
        }
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<QueueStatus, DispatchError> {
        match self.send(DispatchCommand::Status).await? {
            DispatchReply::Status(status) => Ok(status),
            _ => Err(Self::unexpected("status")),
        }
    }

    /// Moves an order to `target` and returns it as it is now.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: OrderId,
        target: OrderState,
    ) -> Result<Order, DispatchError> {
        debug!("Sending request");
        match self.send(DispatchCommand::Transition { id, target }).await? {
            DispatchReply::Transition(result) => result,
            _ => Err(Self::unexpected("transition")),
        }
    }

    /// Cancels an order. A waiting order leaves the queue.
    pub async fn cancel(&self, id: OrderId) -> Result<Order, DispatchError> {
        self.transition(id, OrderState::Cancelled).await
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, id: OrderId) -> Result<Option<Order>, DispatchError> {
        match self.send(DispatchCommand::Lookup(id)).await? {
            DispatchReply::Lookup(order) => Ok(order),
            _ => Err(Self::unexpected("lookup")),
        }
    }

    /// Every order that has left the queue, by id.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<Order>, DispatchError> {
        match self.send(DispatchCommand::History).await? {
            DispatchReply::History(orders) => Ok(orders),
            _ => Err(Self::unexpected("history")),
        }
    }
}
