use error_stack::Report;

use kernel::interface::query::ReturnQuery;
use kernel::interface::update::ReturnModifier;
use kernel::prelude::entity::{RentalId, RentalReturn};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryReturnRepository;

#[async_trait::async_trait]
impl ReturnQuery for MemoryReturnRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_rental_id(
        &self,
        con: &mut MemoryTransaction,
        rental_id: &RentalId,
    ) -> error_stack::Result<Option<RentalReturn>, KernelError> {
        Ok(con
            .store()
            .returns
            .iter()
            .find(|record| record.rental_id() == rental_id)
            .cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<RentalReturn>, KernelError> {
        Ok(con.store().returns.clone())
    }
}

#[async_trait::async_trait]
impl ReturnModifier for MemoryReturnRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        record: &RentalReturn,
    ) -> error_stack::Result<(), KernelError> {
        let returns = &mut con.lock().await.returns;
        if returns
            .iter()
            .any(|stored| stored.rental_id() == record.rental_id())
        {
            return Err(Report::new(KernelError::Conflict).attach_printable(format!(
                "Rental {} already has a return",
                record.rental_id()
            )));
        }
        returns.push(record.clone());
        Ok(())
    }
}
