use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Repair, RepairFilter};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RepairQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_filter(
        &self,
        con: &mut Self::Transaction,
        filter: &RepairFilter,
    ) -> error_stack::Result<Vec<Repair>, KernelError>;
}

pub trait DependOnRepairQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RepairQuery: RepairQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn repair_query(&self) -> &Self::RepairQuery;
}
