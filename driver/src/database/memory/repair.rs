use kernel::interface::query::RepairQuery;
use kernel::interface::update::RepairModifier;
use kernel::prelude::entity::{Repair, RepairFilter};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryRepairRepository;

#[async_trait::async_trait]
impl RepairQuery for MemoryRepairRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_filter(
        &self,
        con: &mut MemoryTransaction,
        filter: &RepairFilter,
    ) -> error_stack::Result<Vec<Repair>, KernelError> {
        let mut repairs = con
            .store()
            .repairs
            .iter()
            .filter(|repair| filter.matches(repair))
            .cloned()
            .collect::<Vec<_>>();
        repairs.sort_by_key(|repair| *repair.performed_on());
        Ok(repairs)
    }
}

#[async_trait::async_trait]
impl RepairModifier for MemoryRepairRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        repair: &Repair,
    ) -> error_stack::Result<(), KernelError> {
        con.lock().await.repairs.push(repair.clone());
        Ok(())
    }
}
