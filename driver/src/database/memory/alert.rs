use kernel::interface::query::AlertQuery;
use kernel::interface::update::AlertModifier;
use kernel::prelude::entity::Alert;
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryAlertRepository;

#[async_trait::async_trait]
impl AlertQuery for MemoryAlertRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Alert>, KernelError> {
        Ok(con.store().alerts.clone())
    }
}

#[async_trait::async_trait]
impl AlertModifier for MemoryAlertRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        alert: &Alert,
    ) -> error_stack::Result<(), KernelError> {
        con.lock().await.alerts.push(alert.clone());
        Ok(())
    }
}
