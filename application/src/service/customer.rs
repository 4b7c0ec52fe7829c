use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::interface::update::{CustomerModifier, DependOnCustomerModifier};
use kernel::prelude::entity::{
    Customer, CustomerAddress, CustomerFirstName, CustomerId, CustomerLastName, CustomerPhone,
};
use kernel::KernelError;

use crate::service::ensure_filled;
use crate::transfer::{
    CreateCustomerDto, CustomerDto, DeleteCustomerDto, GetAllCustomerDto, GetCustomerDto,
    UpdateCustomerDto,
};

fn customer_not_found(id: &CustomerId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Customer {id} not found"))
}

#[async_trait::async_trait]
pub trait GetCustomerService: 'static + Sync + Send + DependOnCustomerQuery {
    async fn get_customer(
        &self,
        dto: GetCustomerDto,
    ) -> error_stack::Result<Option<CustomerDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let id = CustomerId::new(dto.id);
        let customer = self.customer_query().find_by_id(&mut con, &id).await?;
        Ok(customer.map(CustomerDto::from))
    }

    async fn list_customers(
        &self,
        dto: GetAllCustomerDto,
    ) -> error_stack::Result<Vec<CustomerDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let customers = self
            .customer_query()
            .find_all(&mut con, &dto.limit, &dto.offset)
            .await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }
}

impl<T> GetCustomerService for T where T: DependOnCustomerQuery {}

#[async_trait::async_trait]
pub trait CreateCustomerService: 'static + Sync + Send + DependOnCustomerModifier {
    async fn register_customer(
        &self,
        dto: CreateCustomerDto,
    ) -> error_stack::Result<CustomerDto, KernelError> {
        ensure_filled("First name", &dto.first_name)?;
        ensure_filled("Last name", &dto.last_name)?;

        let mut con = self.database_connection().transact().await?;
        let customer = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerFirstName::new(dto.first_name),
            CustomerLastName::new(dto.last_name),
            dto.phone.map(CustomerPhone::new),
            dto.address.map(CustomerAddress::new),
        );
        self.customer_modifier().create(&mut con, &customer).await?;
        con.commit().await?;

        tracing::info!(customer = %customer.id(), "Customer registered");
        Ok(CustomerDto::from(customer))
    }
}

impl<T> CreateCustomerService for T where T: DependOnCustomerModifier {}

#[async_trait::async_trait]
pub trait UpdateCustomerService:
    'static + Sync + Send + DependOnCustomerQuery + DependOnCustomerModifier
{
    async fn update_customer(
        &self,
        dto: UpdateCustomerDto,
    ) -> error_stack::Result<CustomerDto, KernelError> {
        if let Some(first_name) = &dto.first_name {
            ensure_filled("First name", first_name)?;
        }
        if let Some(last_name) = &dto.last_name {
            ensure_filled("Last name", last_name)?;
        }

        let mut con = self.database_connection().transact().await?;
        let id = CustomerId::new(dto.id);
        let mut customer = self
            .customer_query()
            .find_by_id(&mut con, &id)
            .await?
            .ok_or_else(|| customer_not_found(&id))?;

        customer.substitute(|customer| {
            if let Some(first_name) = dto.first_name {
                *customer.first_name = CustomerFirstName::new(first_name);
            }
            if let Some(last_name) = dto.last_name {
                *customer.last_name = CustomerLastName::new(last_name);
            }
            if let Some(phone) = dto.phone {
                *customer.phone = Some(CustomerPhone::new(phone));
            }
            if let Some(address) = dto.address {
                *customer.address = Some(CustomerAddress::new(address));
            }
        });
        self.customer_modifier().update(&mut con, &customer).await?;
        con.commit().await?;

        tracing::info!(customer = %id, "Customer updated");
        Ok(CustomerDto::from(customer))
    }
}

impl<T> UpdateCustomerService for T where T: DependOnCustomerQuery + DependOnCustomerModifier {}

#[async_trait::async_trait]
pub trait DeleteCustomerService:
    'static + Sync + Send + DependOnCustomerQuery + DependOnCustomerModifier
{
    async fn delete_customer(
        &self,
        dto: DeleteCustomerDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().transact().await?;
        let id = CustomerId::new(dto.id);
        if !self.customer_query().exists(&mut con, &id).await? {
            return Err(customer_not_found(&id));
        }
        self.customer_modifier().delete(&mut con, &id).await?;
        con.commit().await?;

        tracing::info!(customer = %id, "Customer deleted");
        Ok(())
    }
}

impl<T> DeleteCustomerService for T where T: DependOnCustomerQuery + DependOnCustomerModifier {}
