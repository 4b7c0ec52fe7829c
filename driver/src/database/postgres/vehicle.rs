use error_stack::Report;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::VehicleQuery;
use kernel::interface::update::VehicleModifier;
use kernel::prelude::entity::{
    SelectLimit, SelectOffset, Vehicle, VehicleAvailability, VehicleBrand, VehicleId,
    VehicleModel, VehicleYear,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresVehicleRepository;

#[async_trait::async_trait]
impl VehicleQuery for PostgresVehicleRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        PgVehicleInternal::find_by_id(con, id).await
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresConnection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        PgVehicleInternal::find_by_id_for_update(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        PgVehicleInternal::find_all(con, limit, offset).await
    }

    async fn find_available(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        PgVehicleInternal::find_available(con).await
    }
}

#[async_trait::async_trait]
impl VehicleModifier for PostgresVehicleRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        PgVehicleInternal::create(con, vehicle).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        PgVehicleInternal::update(con, vehicle).await
    }

    async fn set_available(
        &self,
        con: &mut PostgresConnection,
        id: &VehicleId,
        availability: &VehicleAvailability,
    ) -> error_stack::Result<(), KernelError> {
        PgVehicleInternal::set_available(con, id, availability).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        id: &VehicleId,
    ) -> error_stack::Result<(), KernelError> {
        PgVehicleInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    brand: String,
    model: String,
    year: i32,
    available: bool,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle::new(
            VehicleId::new(row.id),
            VehicleBrand::new(row.brand),
            VehicleModel::new(row.model),
            VehicleYear::new(row.year),
            VehicleAvailability::new(row.available),
        )
    }
}

fn not_found(id: &VehicleId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Vehicle {id} not found"))
}

pub(in crate::database) struct PgVehicleInternal;

impl PgVehicleInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, year, available
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Vehicle::from))
    }

    async fn find_by_id_for_update(
        con: &mut PgConnection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, year, available
            FROM vehicles
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Vehicle::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, year, available
            FROM vehicles
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn find_available(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, year, available
            FROM vehicles
            WHERE available
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn create(con: &mut PgConnection, vehicle: &Vehicle) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO vehicles (id, brand, model, year, available)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(vehicle.id().as_ref())
        .bind(vehicle.brand().as_ref())
        .bind(vehicle.model().as_ref())
        .bind(vehicle.year().as_ref())
        .bind(vehicle.availability().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, vehicle: &Vehicle) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE vehicles
            SET brand = $2, model = $3, year = $4
            WHERE id = $1
            "#,
        )
        .bind(vehicle.id().as_ref())
        .bind(vehicle.brand().as_ref())
        .bind(vehicle.model().as_ref())
        .bind(vehicle.year().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(not_found(vehicle.id()));
        }
        Ok(())
    }

    async fn set_available(
        con: &mut PgConnection,
        id: &VehicleId,
        availability: &VehicleAvailability,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE vehicles
            SET available = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(availability.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &VehicleId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM vehicles
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
