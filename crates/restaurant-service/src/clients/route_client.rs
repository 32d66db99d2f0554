//! # Route Client

use crate::framework::{ActorClient, EngineClient, ServiceError};
use crate::route_actor::{RouteCommand, RouteReply, RouteServiceError};
use async_trait::async_trait;
use restaurant_core::routes::{RouteGraph, ShortestPaths, SpanningNetwork, Tour};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RouteClient {
    inner: EngineClient<RouteGraph>,
}

impl RouteClient {
    pub fn new(inner: EngineClient<RouteGraph>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<RouteGraph> for RouteClient {
    type Error = RouteServiceError;

    fn inner(&self) -> &EngineClient<RouteGraph> {
        &self.inner
    }

    fn map_error(e: ServiceError) -> Self::Error {
        RouteServiceError::ActorCommunicationError(e.to_string())
    }
}

impl RouteClient {
    /// Sends a command, turning `UnknownLocation` replies into errors.
    async fn send(&self, command: RouteCommand) -> Result<RouteReply, RouteServiceError> {
        match self.inner.send(command).await.map_err(Self::map_error)? {
            RouteReply::UnknownLocation(location) => {
                Err(RouteServiceError::UnknownLocation(location))
            }
            reply => Ok(reply),
        }
    }

    fn unexpected(operation: &'static str) -> RouteServiceError {
        Self::map_error(ServiceError::UnexpectedReply(operation))
    }

    #[instrument(skip(self))]
    pub async fn add_edge(
        &self,
        from: usize,
        to: usize,
        weight: i64,
    ) -> Result<(), RouteServiceError> {
        debug!("Sending request");
        match self.send(RouteCommand::AddEdge { from, to, weight }).await? {
            RouteReply::AddEdge(result) => Ok(result?),
            _ => Err(Self::unexpected("add_edge")),
        }
    }

    #[instrument(skip(self))]
    pub async fn shortest_paths(&self, source: usize) -> Result<ShortestPaths, RouteServiceError> {
        debug!("Sending request");
        match self.send(RouteCommand::ShortestPaths { source }).await? {
            RouteReply::ShortestPaths(paths) => Ok(paths),
            _ => Err(Self::unexpected("shortest_paths")),
        }
    }

    #[instrument(skip(self))]
    pub async fn minimum_network(&self) -> Result<SpanningNetwork, RouteServiceError> {
        debug!("Sending request");
        match self.send(RouteCommand::MinimumNetwork).await? {
            RouteReply::MinimumNetwork(network) => Ok(network),
            _ => Err(Self::unexpected("minimum_network")),
        }
    }

    #[instrument(skip(self))]
    pub async fn breadth_first(&self, start: usize) -> Result<Vec<usize>, RouteServiceError> {
        match self.send(RouteCommand::BreadthFirst { start }).await? {
            RouteReply::Visited(order) => Ok(order),
            _ => Err(Self::unexpected("breadth_first")),
        }
    }

    #[instrument(skip(self))]
    pub async fn depth_first(&self, start: usize) -> Result<Vec<usize>, RouteServiceError> {
        match self.send(RouteCommand::DepthFirst { start }).await? {
            RouteReply::Visited(order) => Ok(order),
            _ => Err(Self::unexpected("depth_first")),
        }
    }

    /// Greedy delivery round starting and, if possible, ending at `start`.
    #[instrument(skip(self))]
    pub async fn tour(&self, start: usize) -> Result<Tour, RouteServiceError> {
        debug!("Sending request");
        match self.send(RouteCommand::Tour { start }).await? {
            RouteReply::Tour(tour) => Ok(tour),
            _ => Err(Self::unexpected("tour")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use restaurant_core::RouteError;

    #[tokio::test]
    async fn test_unknown_location_becomes_error() {
        let mut mock = MockClient::<RouteGraph>::new();
        mock.expect_command().return_ok(RouteReply::UnknownLocation(9));
        let client = RouteClient::new(mock.client());

        assert_eq!(
            client.shortest_paths(9).await,
            Err(RouteServiceError::UnknownLocation(9))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_negative_weight_becomes_error() {
        let mut mock = MockClient::<RouteGraph>::new();
        let refused = RouteError::NegativeWeight {
            from: 0,
            to: 1,
            weight: -2,
        };
        mock.expect_command()
            .return_ok(RouteReply::AddEdge(Err(refused.clone())));
        let client = RouteClient::new(mock.client());

        assert_eq!(
            client.add_edge(0, 1, -2).await,
            Err(RouteServiceError::Route(refused))
        );
        mock.verify();
    }
}
