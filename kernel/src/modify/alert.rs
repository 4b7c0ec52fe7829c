use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Alert;
use crate::KernelError;

#[async_trait::async_trait]
pub trait AlertModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        alert: &Alert,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAlertModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AlertModifier: AlertModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn alert_modifier(&self) -> &Self::AlertModifier;
}
