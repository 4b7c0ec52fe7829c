use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::AlertQuery;
use kernel::interface::update::AlertModifier;
use kernel::prelude::entity::{
    Alert, AlertDescription, AlertId, CreatedAt, RentalId, VehicleCondition, VehicleId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresAlertRepository;

#[async_trait::async_trait]
impl AlertQuery for PostgresAlertRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Alert>, KernelError> {
        PgAlertInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl AlertModifier for PostgresAlertRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        alert: &Alert,
    ) -> error_stack::Result<(), KernelError> {
        PgAlertInternal::create(con, alert).await
    }
}

#[derive(sqlx::FromRow)]
struct AlertRow {
    id: Uuid,
    vehicle_id: Uuid,
    rental_id: Uuid,
    condition: String,
    description: String,
    created_at: OffsetDateTime,
}

impl TryFrom<AlertRow> for Alert {
    type Error = Report<KernelError>;
    fn try_from(row: AlertRow) -> Result<Self, Self::Error> {
        let condition = row
            .condition
            .parse::<VehicleCondition>()
            .map_err(|report| report.change_context(KernelError::Internal))?;
        Ok(Alert::new(
            AlertId::new(row.id),
            VehicleId::new(row.vehicle_id),
            RentalId::new(row.rental_id),
            condition,
            AlertDescription::new(row.description),
            CreatedAt::new(row.created_at),
        ))
    }
}

pub(in crate::database) struct PgAlertInternal;

impl PgAlertInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Alert>, KernelError> {
        let rows = sqlx::query_as::<_, AlertRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, rental_id, condition, description, created_at
            FROM alerts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Alert::try_from).collect()
    }

    async fn create(con: &mut PgConnection, alert: &Alert) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO alerts (id, vehicle_id, rental_id, condition, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(alert.id().as_ref())
        .bind(alert.vehicle_id().as_ref())
        .bind(alert.rental_id().as_ref())
        .bind(alert.condition().as_str())
        .bind(alert.description().as_ref())
        .bind(alert.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
