use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{AlertQuery, DependOnAlertQuery};
use kernel::interface::update::{AlertModifier, DependOnAlertModifier};
use kernel::prelude::entity::{
    Alert, AlertDescription, AlertId, CreatedAt, RentalId, VehicleCondition, VehicleId,
};
use kernel::KernelError;

use crate::transfer::AlertDto;

/// Files maintenance alerts for vehicles returned in bad condition.
#[async_trait::async_trait]
pub trait EmitAlertService: 'static + Sync + Send + DependOnAlertModifier {
    /// Records one alert on the caller's transaction. Repeated calls file
    /// repeated alerts.
    async fn on_bad_return(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        vehicle_id: &VehicleId,
        rental_id: &RentalId,
    ) -> error_stack::Result<AlertDto, KernelError> {
        let alert = Alert::new(
            AlertId::new(Uuid::new_v4()),
            *vehicle_id,
            *rental_id,
            VehicleCondition::Bad,
            AlertDescription::bad_return(),
            CreatedAt::now(),
        );
        self.alert_modifier().create(con, &alert).await?;

        tracing::warn!(vehicle = %vehicle_id, rental = %rental_id, "Vehicle returned in bad condition");
        Ok(AlertDto::from(alert))
    }
}

impl<T> EmitAlertService for T where T: DependOnAlertModifier {}

#[async_trait::async_trait]
pub trait GetAlertService: 'static + Sync + Send + DependOnAlertQuery {
    async fn list_alerts(&self) -> error_stack::Result<Vec<AlertDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let alerts = self.alert_query().find_all(&mut con).await?;
        Ok(alerts.into_iter().map(AlertDto::from).collect())
    }
}

impl<T> GetAlertService for T where T: DependOnAlertQuery {}

#[cfg(test)]
mod test {
    use driver::database::MemoryDatabase;
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::prelude::entity::{RentalId, VehicleCondition, VehicleId};
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::service::{EmitAlertService, GetAlertService};

    #[tokio::test]
    async fn alerts_are_not_deduplicated() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle_id = VehicleId::new(Uuid::new_v4());
        let rental_id = RentalId::new(Uuid::new_v4());

        let mut con = db.transact().await?;
        let first = db.on_bad_return(&mut con, &vehicle_id, &rental_id).await?;
        let second = db.on_bad_return(&mut con, &vehicle_id, &rental_id).await?;
        con.commit().await?;
        assert_ne!(first.id, second.id);

        let alerts = db.list_alerts().await?;
        assert_eq!(alerts, vec![first, second]);
        assert!(alerts
            .iter()
            .all(|alert| alert.condition == VehicleCondition::Bad));
        Ok(())
    }

    #[tokio::test]
    async fn uncommitted_alert_is_discarded() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        db.on_bad_return(
            &mut con,
            &VehicleId::new(Uuid::new_v4()),
            &RentalId::new(Uuid::new_v4()),
        )
        .await?;
        drop(con);

        assert!(db.list_alerts().await?.is_empty());
        Ok(())
    }
}
