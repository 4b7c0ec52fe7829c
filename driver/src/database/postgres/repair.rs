use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::RepairQuery;
use kernel::interface::update::RepairModifier;
use kernel::prelude::entity::{
    Repair, RepairCost, RepairDate, RepairDescription, RepairFilter, RepairId, VehicleId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresRepairRepository;

#[async_trait::async_trait]
impl RepairQuery for PostgresRepairRepository {
    type Transaction = PostgresConnection;

    async fn find_by_filter(
        &self,
        con: &mut PostgresConnection,
        filter: &RepairFilter,
    ) -> error_stack::Result<Vec<Repair>, KernelError> {
        PgRepairInternal::find_by_filter(con, filter).await
    }
}

#[async_trait::async_trait]
impl RepairModifier for PostgresRepairRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        repair: &Repair,
    ) -> error_stack::Result<(), KernelError> {
        PgRepairInternal::create(con, repair).await
    }
}

#[derive(sqlx::FromRow)]
struct RepairRow {
    id: Uuid,
    vehicle_id: Uuid,
    performed_on: Date,
    description: String,
    cost: i64,
}

impl From<RepairRow> for Repair {
    fn from(row: RepairRow) -> Self {
        Repair::new(
            RepairId::new(row.id),
            VehicleId::new(row.vehicle_id),
            RepairDate::new(row.performed_on),
            RepairDescription::new(row.description),
            RepairCost::new(row.cost),
        )
    }
}

pub(in crate::database) struct PgRepairInternal;

impl PgRepairInternal {
    async fn find_by_filter(
        con: &mut PgConnection,
        filter: &RepairFilter,
    ) -> error_stack::Result<Vec<Repair>, KernelError> {
        let rows = sqlx::query_as::<_, RepairRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, performed_on, description, cost
            FROM repairs
            WHERE ($1::DATE IS NULL OR performed_on >= $1)
              AND ($2::DATE IS NULL OR performed_on <= $2)
              AND ($3::BIGINT IS NULL OR cost <= $3)
            ORDER BY performed_on, id
            "#,
        )
        .bind(filter.from().map(Date::from))
        .bind(filter.to().map(Date::from))
        .bind(filter.max_cost().map(i64::from))
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Repair::from).collect())
    }

    async fn create(con: &mut PgConnection, repair: &Repair) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO repairs (id, vehicle_id, performed_on, description, cost)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(repair.id().as_ref())
        .bind(repair.vehicle_id().as_ref())
        .bind(repair.performed_on().as_ref())
        .bind(repair.description().as_ref())
        .bind(repair.cost().as_ref())
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
    use kernel::interface::query::RepairQuery;
    use kernel::interface::update::RepairModifier;
    use kernel::prelude::entity::{
        Repair, RepairCost, RepairDate, RepairDescription, RepairFilter, RepairId, VehicleId,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresRepairRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn repairs_are_filtered() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let vehicle_id = VehicleId::new(Uuid::new_v4());
        let cheap = Repair::new(
            RepairId::new(Uuid::new_v4()),
            vehicle_id,
            RepairDate::new(date!(1990 - 01 - 02)),
            RepairDescription::new("Wiper blades"),
            RepairCost::new(20),
        );
        let costly = Repair::new(
            RepairId::new(Uuid::new_v4()),
            vehicle_id,
            RepairDate::new(date!(1990 - 01 - 03)),
            RepairDescription::new("Gearbox"),
            RepairCost::new(2000),
        );
        PostgresRepairRepository.create(&mut con, &cheap).await?;
        PostgresRepairRepository.create(&mut con, &costly).await?;

        let filter = RepairFilter::new(
            Some(RepairDate::new(date!(1990 - 01 - 01))),
            Some(RepairDate::new(date!(1990 - 01 - 31))),
            Some(RepairCost::new(100)),
        )?;
        let found = PostgresRepairRepository
            .find_by_filter(&mut con, &filter)
            .await?;
        assert_eq!(found, vec![cheap]);
        Ok(())
    }
}
