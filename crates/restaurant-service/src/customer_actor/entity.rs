use super::actions::{CustomerCommand, CustomerReply};
use crate::framework::Engine;
use restaurant_core::customers::{CustomerIndex, CustomerRecord};

impl Engine for CustomerIndex {
    const NAME: &'static str = "customers";

    type Command = CustomerCommand;
    type Reply = CustomerReply;
    type Snapshot = Vec<CustomerRecord>;

    fn handle(&mut self, command: CustomerCommand) -> CustomerReply {
        match command {
            CustomerCommand::Register(record) => CustomerReply::Register(self.register(record)),
            CustomerCommand::Lookup(id) => CustomerReply::Lookup(self.search(&id).cloned()),
            CustomerCommand::AddLoyaltyPoints { id, points } => {
                CustomerReply::AddLoyaltyPoints(self.add_loyalty_points(id, points))
            }
        }
    }

    fn snapshot(&self) -> Vec<CustomerRecord> {
        self.records()
    }
}
