use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::RentalReturn;
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReturnModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        rental_return: &RentalReturn,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnReturnModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ReturnModifier: ReturnModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn return_modifier(&self) -> &Self::ReturnModifier;
}
