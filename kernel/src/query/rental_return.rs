use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{RentalId, RentalReturn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReturnQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_rental_id(
        &self,
        con: &mut Self::Transaction,
        rental_id: &RentalId,
    ) -> error_stack::Result<Option<RentalReturn>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<RentalReturn>, KernelError>;
}

pub trait DependOnReturnQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type ReturnQuery: ReturnQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn return_query(&self) -> &Self::ReturnQuery;
}
