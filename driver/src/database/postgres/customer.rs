use error_stack::Report;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{
    Customer, CustomerAddress, CustomerFirstName, CustomerId, CustomerLastName, CustomerPhone,
    SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery for PostgresCustomerRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        PgCustomerInternal::find_by_id(con, id).await
    }

    async fn exists(
        &self,
        con: &mut PostgresConnection,
        id: &CustomerId,
    ) -> error_stack::Result<bool, KernelError> {
        PgCustomerInternal::exists(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        PgCustomerInternal::find_all(con, limit, offset).await
    }
}

#[async_trait::async_trait]
impl CustomerModifier for PostgresCustomerRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::create(con, customer).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::update(con, customer).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        id: &CustomerId,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    address: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(
            CustomerId::new(row.id),
            CustomerFirstName::new(row.first_name),
            CustomerLastName::new(row.last_name),
            row.phone.map(CustomerPhone::new),
            row.address.map(CustomerAddress::new),
        )
    }
}

pub(in crate::database) struct PgCustomerInternal;

impl PgCustomerInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, phone, address
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Customer::from))
    }

    async fn exists(con: &mut PgConnection, id: &CustomerId) -> error_stack::Result<bool, KernelError> {
        let (exists,) = sqlx::query_as::<_, (bool,)>(
            // language=postgresql
            r#"
            SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(exists)
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, phone, address
            FROM customers
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn create(con: &mut PgConnection, customer: &Customer) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO customers (id, first_name, last_name, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(customer.id().as_ref())
        .bind(customer.first_name().as_ref())
        .bind(customer.last_name().as_ref())
        .bind(customer.phone().clone().map(String::from))
        .bind(customer.address().clone().map(String::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, customer: &Customer) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, phone = $4, address = $5
            WHERE id = $1
            "#,
        )
        .bind(customer.id().as_ref())
        .bind(customer.first_name().as_ref())
        .bind(customer.last_name().as_ref())
        .bind(customer.phone().clone().map(String::from))
        .bind(customer.address().clone().map(String::from))
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Customer {} not found", customer.id())));
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &CustomerId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CustomerQuery;
    use kernel::interface::update::CustomerModifier;
    use kernel::prelude::entity::{
        Customer, CustomerFirstName, CustomerId, CustomerLastName, CustomerPhone,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresCustomerRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn customer_round_trip() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = CustomerId::new(Uuid::new_v4());
        let customer = Customer::new(
            id,
            CustomerFirstName::new("Edsger"),
            CustomerLastName::new("Dijkstra"),
            Some(CustomerPhone::new("555-0199")),
            None,
        );
        PostgresCustomerRepository.create(&mut con, &customer).await?;
        assert!(PostgresCustomerRepository.exists(&mut con, &id).await?);
        assert_eq!(
            PostgresCustomerRepository.find_by_id(&mut con, &id).await?,
            Some(customer)
        );

        PostgresCustomerRepository.delete(&mut con, &id).await?;
        assert!(!PostgresCustomerRepository.exists(&mut con, &id).await?);
        Ok(())
    }
}
