use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Alert;
use crate::KernelError;

#[async_trait::async_trait]
pub trait AlertQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Every alert ever filed, oldest first.
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Alert>, KernelError>;
}

pub trait DependOnAlertQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type AlertQuery: AlertQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn alert_query(&self) -> &Self::AlertQuery;
}
