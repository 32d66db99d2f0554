//! # Inventory Client

use crate::framework::{ActorClient, EngineClient, ServiceError};
use crate::inventory_actor::{InventoryCommand, InventoryError, InventoryReply, ReductionOutcome};
use async_trait::async_trait;
use restaurant_core::inventory::{InventoryRecord, InventoryTable, StockEntry};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct InventoryClient {
    inner: EngineClient<InventoryTable>,
}

impl InventoryClient {
    pub fn new(inner: EngineClient<InventoryTable>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryTable> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &EngineClient<InventoryTable> {
        &self.inner
    }

    fn map_error(e: ServiceError) -> Self::Error {
        InventoryError::ActorCommunicationError(e.to_string())
    }
}

impl InventoryClient {
    async fn send(&self, command: InventoryCommand) -> Result<InventoryReply, InventoryError> {
        self.inner.send(command).await.map_err(Self::map_error)
    }

    fn unexpected(operation: &'static str) -> InventoryError {
        Self::map_error(ServiceError::UnexpectedReply(operation))
    }

    /// Inserts or replaces an ingredient. Returns the record it replaced.
    #[instrument(skip(self, record))]
    pub async fn stock(
        &self,
        name: &str,
        record: InventoryRecord,
    ) -> Result<Option<InventoryRecord>, InventoryError> {
        debug!("Sending request");
        let command = InventoryCommand::Stock {
            name: name.to_string(),
            record,
        };
        match self.send(command).await? {
            InventoryReply::Stock(previous) => Ok(previous),
            _ => Err(Self::unexpected("stock")),
        }
    }

    #[instrument(skip(self))]
    pub async fn retrieve(&self, name: &str) -> Result<Option<InventoryRecord>, InventoryError> {
        debug!("Sending request");
        match self.send(InventoryCommand::Retrieve(name.to_string())).await? {
            InventoryReply::Retrieve(record) => Ok(record),
            _ => Err(Self::unexpected("retrieve")),
        }
    }

    /// Takes `amount` units out of stock and returns what is left.
    ///
    /// Fails with [`InventoryError::InsufficientStock`] when the stock cannot
    /// cover it; the quantity is then left as it was.
    #[instrument(skip(self))]
    pub async fn reduce(&self, name: &str, amount: u32) -> Result<u32, InventoryError> {
        debug!("Reducing {} units of {}", amount, name);
        let command = InventoryCommand::Reduce {
            name: name.to_string(),
            amount,
        };
        match self.send(command).await? {
            InventoryReply::Reduce(ReductionOutcome::Reduced { remaining }) => Ok(remaining),
            InventoryReply::Reduce(ReductionOutcome::Insufficient { available }) => {
                Err(InventoryError::InsufficientStock {
                    name: name.to_string(),
                    requested: amount,
                    available,
                })
            }
            InventoryReply::Reduce(ReductionOutcome::Unknown) => {
                Err(InventoryError::UnknownIngredient(name.to_string()))
            }
            _ => Err(Self::unexpected("reduce")),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, name: &str, amount: u32) -> Result<(), InventoryError> {
        debug!("Restocking {} units of {}", amount, name);
        let command = InventoryCommand::Restock {
            name: name.to_string(),
            amount,
        };
        match self.send(command).await? {
            InventoryReply::Restock(true) => Ok(()),
            InventoryReply::Restock(false) => Err(InventoryError::RestockRefused(name.to_string())),
            _ => Err(Self::unexpected("restock")),
        }
    }

    /// Ingredients at or below their reorder threshold.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<StockEntry>, InventoryError> {
        debug!("Sending request");
        match self.send(InventoryCommand::LowStock).await? {
            InventoryReply::LowStock(entries) => Ok(entries),
            _ => Err(Self::unexpected("low_stock")),
        }
    }
}
