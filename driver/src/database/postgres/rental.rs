use error_stack::Report;
use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    CustomerId, Rental, RentalCost, RentalEndDate, RentalId, RentalStartDate, RentalStatus,
    VehicleId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery for PostgresRentalRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con, id, false).await
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con, id, true).await
    }

    async fn find_active_by_vehicle_id(
        &self,
        con: &mut PostgresConnection,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_active_by_vehicle_id(con, vehicle_id).await
    }

    async fn find_started_since(
        &self,
        con: &mut PostgresConnection,
        since: &Date,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_started_since(con, since).await
    }
}

#[async_trait::async_trait]
impl RentalModifier for PostgresRentalRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con, rental).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::update(con, rental).await
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: Uuid,
    vehicle_id: Uuid,
    customer_id: Uuid,
    start_date: Date,
    end_date: Option<Date>,
    cost: i64,
    status: String,
}

impl TryFrom<RentalRow> for Rental {
    type Error = Report<KernelError>;
    fn try_from(row: RentalRow) -> Result<Self, Self::Error> {
        Ok(Rental::new(
            RentalId::new(row.id),
            VehicleId::new(row.vehicle_id),
            CustomerId::new(row.customer_id),
            RentalStartDate::new(row.start_date),
            row.end_date.map(RentalEndDate::new),
            RentalCost::new(row.cost),
            row.status.parse::<RentalStatus>()?,
        ))
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
        lock: bool,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let query = if lock {
            // language=postgresql
            r#"
            SELECT id, vehicle_id, customer_id, start_date, end_date, cost, status
            FROM rentals
            WHERE id = $1
            FOR UPDATE
            "#
        } else {
            // language=postgresql
            r#"
            SELECT id, vehicle_id, customer_id, start_date, end_date, cost, status
            FROM rentals
            WHERE id = $1
            "#
        };
        let row = sqlx::query_as::<_, RentalRow>(query)
            .bind(id.as_ref())
            .fetch_optional(con)
            .await
            .convert_error()?;
        row.map(Rental::try_from).transpose()
    }

    async fn find_active_by_vehicle_id(
        con: &mut PgConnection,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, customer_id, start_date, end_date, cost, status
            FROM rentals
            WHERE vehicle_id = $1 AND status = 'active'
            "#,
        )
        .bind(vehicle_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Rental::try_from).transpose()
    }

    async fn find_started_since(
        con: &mut PgConnection,
        since: &Date,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, customer_id, start_date, end_date, cost, status
            FROM rentals
            WHERE start_date >= $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(since)
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(%since, rows = rows.len(), "Fetched recent rentals");
        rows.into_iter().map(Rental::try_from).collect()
    }

    async fn create(con: &mut PgConnection, rental: &Rental) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO rentals (id, vehicle_id, customer_id, start_date, end_date, cost, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.vehicle_id().as_ref())
        .bind(rental.customer_id().as_ref())
        .bind(rental.start_date().as_ref())
        .bind(rental.end_date().map(Date::from))
        .bind(rental.cost().as_ref())
        .bind(rental.status().as_str())
        .execute(con)
        .await
        .convert_error()
        .map_err(|report| match report.current_context() {
            KernelError::Conflict => report.attach_printable(format!(
                "Vehicle {} already has an active rental",
                rental.vehicle_id()
            )),
            _ => report,
        })?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, rental: &Rental) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE rentals
            SET start_date = $2, end_date = $3, cost = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.start_date().as_ref())
        .bind(rental.end_date().map(Date::from))
        .bind(rental.cost().as_ref())
        .bind(rental.status().as_str())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Rental {} not found", rental.id())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{
        CustomerId, Rental, RentalCost, RentalId, RentalStartDate, RentalStatus, VehicleId,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresRentalRepository};

    fn rental(vehicle_id: VehicleId) -> Rental {
        Rental::new(
            RentalId::new(Uuid::new_v4()),
            vehicle_id,
            CustomerId::new(Uuid::new_v4()),
            RentalStartDate::new(date!(2025 - 08 - 01)),
            None,
            RentalCost::new(1000),
            RentalStatus::Active,
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn second_active_rental_conflicts() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let vehicle_id = VehicleId::new(Uuid::new_v4());
        let first = rental(vehicle_id);
        PostgresRentalRepository.create(&mut con, &first).await?;
        assert_eq!(
            PostgresRentalRepository
                .find_active_by_vehicle_id(&mut con, &vehicle_id)
                .await?,
            Some(first)
        );

        let error = PostgresRentalRepository
            .create(&mut con, &rental(vehicle_id))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Conflict);
        Ok(())
    }
}
