use error_stack::Report;

use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{Customer, CustomerId, SelectLimit, SelectOffset};
use kernel::KernelError;

use crate::database::memory::{paginate, MemoryTransaction};

pub struct MemoryCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery for MemoryCustomerRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        Ok(con
            .store()
            .customers
            .iter()
            .find(|customer| customer.id() == id)
            .cloned())
    }

    async fn exists(
        &self,
        con: &mut MemoryTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con
            .store()
            .customers
            .iter()
            .any(|customer| customer.id() == id))
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        Ok(paginate(&con.store().customers, limit, offset))
    }
}

#[async_trait::async_trait]
impl CustomerModifier for MemoryCustomerRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        let customers = &mut con.lock().await.customers;
        if customers.iter().any(|stored| stored.id() == customer.id()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("Customer {} already exists", customer.id())));
        }
        customers.push(customer.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .lock()
            .await
            .customers
            .iter_mut()
            .find(|stored| stored.id() == customer.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Customer {} not found", customer.id()))
            })?;
        *stored = customer.clone();
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<(), KernelError> {
        con.lock()
            .await
            .customers
            .retain(|customer| customer.id() != id);
        Ok(())
    }
}
