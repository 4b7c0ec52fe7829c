use error_stack::Report;
use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::ReturnQuery;
use kernel::interface::update::ReturnModifier;
use kernel::prelude::entity::{
    RentalId, RentalReturn, ReturnId, ReturnNotes, ReturnedOn, VehicleCondition,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresReturnRepository;

#[async_trait::async_trait]
impl ReturnQuery for PostgresReturnRepository {
    type Transaction = PostgresConnection;

    async fn find_by_rental_id(
        &self,
        con: &mut PostgresConnection,
        rental_id: &RentalId,
    ) -> error_stack::Result<Option<RentalReturn>, KernelError> {
        PgReturnInternal::find_by_rental_id(con, rental_id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<RentalReturn>, KernelError> {
        PgReturnInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl ReturnModifier for PostgresReturnRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        record: &RentalReturn,
    ) -> error_stack::Result<(), KernelError> {
        PgReturnInternal::create(con, record).await
    }
}

#[derive(sqlx::FromRow)]
struct ReturnRow {
    id: Uuid,
    rental_id: Uuid,
    returned_on: Date,
    condition: String,
    notes: Option<String>,
}

impl TryFrom<ReturnRow> for RentalReturn {
    type Error = Report<KernelError>;
    fn try_from(row: ReturnRow) -> Result<Self, Self::Error> {
        let condition = row
            .condition
            .parse::<VehicleCondition>()
            .map_err(|report| report.change_context(KernelError::Internal))?;
        Ok(RentalReturn::new(
            ReturnId::new(row.id),
            RentalId::new(row.rental_id),
            ReturnedOn::new(row.returned_on),
            condition,
            row.notes.map(ReturnNotes::new),
        ))
    }
}

pub(in crate::database) struct PgReturnInternal;

impl PgReturnInternal {
    async fn find_by_rental_id(
        con: &mut PgConnection,
        rental_id: &RentalId,
    ) -> error_stack::Result<Option<RentalReturn>, KernelError> {
        let row = sqlx::query_as::<_, ReturnRow>(
            // language=postgresql
            r#"
            SELECT id, rental_id, returned_on, condition, notes
            FROM returns
            WHERE rental_id = $1
            "#,
        )
        .bind(rental_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(RentalReturn::try_from).transpose()
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<RentalReturn>, KernelError> {
        let rows = sqlx::query_as::<_, ReturnRow>(
            // language=postgresql
            r#"
            SELECT id, rental_id, returned_on, condition, notes
            FROM returns
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(RentalReturn::try_from).collect()
    }

    async fn create(
        con: &mut PgConnection,
        record: &RentalReturn,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO returns (id, rental_id, returned_on, condition, notes)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id().as_ref())
        .bind(record.rental_id().as_ref())
        .bind(record.returned_on().as_ref())
        .bind(record.condition().as_str())
        .bind(record.notes().clone().map(String::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ReturnQuery;
    use kernel::interface::update::ReturnModifier;
    use kernel::prelude::entity::{
        RentalId, RentalReturn, ReturnId, ReturnNotes, ReturnedOn, VehicleCondition,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresReturnRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn return_keeps_notes() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let rental_id = RentalId::new(Uuid::new_v4());
        let record = RentalReturn::new(
            ReturnId::new(Uuid::new_v4()),
            rental_id,
            ReturnedOn::new(date!(2025 - 08 - 05)),
            VehicleCondition::Bad,
            Some(ReturnNotes::new("Cracked windshield")),
        );
        PostgresReturnRepository.create(&mut con, &record).await?;

        let found = PostgresReturnRepository
            .find_by_rental_id(&mut con, &rental_id)
            .await?;
        assert_eq!(found, Some(record));
        Ok(())
    }
}
