use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Repair;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RepairModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        repair: &Repair,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRepairModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RepairModifier: RepairModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn repair_modifier(&self) -> &Self::RepairModifier;
}
