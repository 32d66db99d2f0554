//! # Customer Client

use crate::customer_actor::{CustomerCommand, CustomerError, CustomerReply};
use crate::framework::{ActorClient, EngineClient, ServiceError};
use async_trait::async_trait;
use restaurant_core::customers::{CustomerId, CustomerIndex, CustomerRecord, MembershipTier};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CustomerClient {
    inner: EngineClient<CustomerIndex>,
}

impl CustomerClient {
    pub fn new(inner: EngineClient<CustomerIndex>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CustomerIndex> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &EngineClient<CustomerIndex> {
        &self.inner
    }

    fn map_error(e: ServiceError) -> Self::Error {
        CustomerError::ActorCommunicationError(e.to_string())
    }
}

impl CustomerClient {
    async fn send(&self, command: CustomerCommand) -> Result<CustomerReply, CustomerError> {
        self.inner.send(command).await.map_err(Self::map_error)
    }

    fn unexpected(operation: &'static str) -> CustomerError {
        Self::map_error(ServiceError::UnexpectedReply(operation))
    }

    /// Registers a customer under its own id.
    #[instrument(skip(self, record), fields(customer_id = %record.id))]
    pub async fn register(&self, record: CustomerRecord) -> Result<(), CustomerError> {
        debug!("Sending request");
        let id = record.id;
        match self.send(CustomerCommand::Register(record)).await? {
            CustomerReply::Register(true) => Ok(()),
            CustomerReply::Register(false) => Err(CustomerError::AlreadyRegistered(id)),
            _ => Err(Self::unexpected("register")),
        }
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, id: CustomerId) -> Result<Option<CustomerRecord>, CustomerError> {
        debug!("Sending request");
        match self.send(CustomerCommand::Lookup(id)).await? {
            CustomerReply::Lookup(record) => Ok(record),
            _ => Err(Self::unexpected("lookup")),
        }
    }

    /// Credits loyalty points and returns the customer's tier afterwards.
    #[instrument(skip(self))]
    pub async fn add_loyalty_points(
        &self,
        id: CustomerId,
        points: u32,
    ) -> Result<MembershipTier, CustomerError> {
        debug!("Sending request");
        match self
            .send(CustomerCommand::AddLoyaltyPoints { id, points })
            .await?
        {
            CustomerReply::AddLoyaltyPoints(Some(tier)) => Ok(tier),
            CustomerReply::AddLoyaltyPoints(None) => Err(CustomerError::NotFound(id)),
            _ => Err(Self::unexpected("add_loyalty_points")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_command, MockClient};

    #[tokio::test]
    async fn test_duplicate_registration_is_an_error() {
        let mut mock = MockClient::<CustomerIndex>::new();
        mock.expect_command().return_ok(CustomerReply::Register(false));
        let client = CustomerClient::new(mock.client());

        let record = CustomerRecord::new(CustomerId(7), "Eve", "555-0107", "eve@example.com");
        assert_eq!(
            client.register(record).await,
            Err(CustomerError::AlreadyRegistered(CustomerId(7)))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_loyalty_points_for_unknown_customer() {
        let (inner, mut receiver) = create_mock_client::<CustomerIndex>(4);
        let client = CustomerClient::new(inner);
        let task = tokio::spawn(async move { client.add_loyalty_points(CustomerId(3), 50).await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected a command");
        assert!(matches!(
            command,
            CustomerCommand::AddLoyaltyPoints {
                id: CustomerId(3),
                points: 50
            }
        ));
        responder.send(Ok(CustomerReply::AddLoyaltyPoints(None))).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(CustomerError::NotFound(CustomerId(3)))
        );
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_reported() {
        let mut mock = MockClient::<CustomerIndex>::new();
        mock.expect_command().return_ok(CustomerReply::Register(true));
        let client = CustomerClient::new(mock.client());

        let err = client.lookup(CustomerId(1)).await.unwrap_err();
        assert!(
            matches!(err, CustomerError::ActorCommunicationError(msg) if msg.contains("lookup"))
        );
    }
}
