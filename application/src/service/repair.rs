use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnRepairQuery, DependOnVehicleQuery, RepairQuery, VehicleQuery};
use kernel::interface::update::{DependOnRepairModifier, RepairModifier};
use kernel::prelude::entity::{
    Repair, RepairCost, RepairDate, RepairDescription, RepairFilter, RepairId, VehicleId,
};
use kernel::KernelError;

use crate::service::{ensure_filled, ensure_non_negative};
use crate::transfer::{GetRepairsDto, RegisterRepairDto, RepairDto};

#[async_trait::async_trait]
pub trait RegisterRepairService:
    'static + Sync + Send + DependOnVehicleQuery + DependOnRepairModifier
{
    async fn register_repair(
        &self,
        dto: RegisterRepairDto,
    ) -> error_stack::Result<RepairDto, KernelError> {
        ensure_filled("Description", &dto.description)?;
        ensure_non_negative("Repair cost", dto.cost)?;

        let mut con = self.database_connection().transact().await?;
        let vehicle_id = VehicleId::new(dto.vehicle_id);
        if self
            .vehicle_query()
            .find_by_id(&mut con, &vehicle_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Vehicle {vehicle_id} not found")));
        }

        let repair = Repair::new(
            RepairId::new(Uuid::new_v4()),
            vehicle_id,
            RepairDate::new(dto.performed_on),
            RepairDescription::new(dto.description),
            RepairCost::new(dto.cost),
        );
        self.repair_modifier().create(&mut con, &repair).await?;
        con.commit().await?;

        tracing::info!(vehicle = %vehicle_id, "Repair registered");
        Ok(RepairDto::from(repair))
    }
}

impl<T> RegisterRepairService for T where T: DependOnVehicleQuery + DependOnRepairModifier {}

#[async_trait::async_trait]
pub trait GetRepairService: 'static + Sync + Send + DependOnRepairQuery {
    /// Repairs inside the inclusive date range and cost ceiling, earliest first.
    async fn query_repairs(
        &self,
        dto: GetRepairsDto,
    ) -> error_stack::Result<Vec<RepairDto>, KernelError> {
        let filter = RepairFilter::new(
            dto.from.map(RepairDate::new),
            dto.to.map(RepairDate::new),
            dto.max_cost.map(RepairCost::new),
        )?;

        let mut con = self.database_connection().transact().await?;
        let repairs = self.repair_query().find_by_filter(&mut con, &filter).await?;
        Ok(repairs.into_iter().map(RepairDto::from).collect())
    }
}

impl<T> GetRepairService for T where T: DependOnRepairQuery {}

#[cfg(test)]
mod test {
    use driver::database::MemoryDatabase;
    use kernel::KernelError;
    use time::macros::date;
    use time::Date;
    use uuid::Uuid;

    use crate::service::{CreateVehicleService, GetRepairService, RegisterRepairService};
    use crate::transfer::{CreateVehicleDto, GetRepairsDto, RegisterRepairDto};

    fn repair(vehicle_id: Uuid, performed_on: Date, cost: i64) -> RegisterRepairDto {
        RegisterRepairDto {
            vehicle_id,
            performed_on,
            description: "Replaced brake pads".to_string(),
            cost,
        }
    }

    #[tokio::test]
    async fn repairs_are_filtered_and_sorted() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = db
            .register_vehicle(CreateVehicleDto {
                brand: "Fiat".to_string(),
                model: "Panda".to_string(),
                year: 2015,
            })
            .await?
            .id;
        db.register_repair(repair(vehicle, date!(2025 - 03 - 01), 900))
            .await?;
        db.register_repair(repair(vehicle, date!(2025 - 01 - 10), 200))
            .await?;
        db.register_repair(repair(vehicle, date!(2025 - 02 - 01), 300))
            .await?;

        let found = db
            .query_repairs(GetRepairsDto {
                from: Some(date!(2025 - 01 - 10)),
                to: Some(date!(2025 - 03 - 01)),
                max_cost: Some(300),
            })
            .await?;
        let dates: Vec<Date> = found.iter().map(|repair| repair.performed_on).collect();
        assert_eq!(dates, vec![date!(2025 - 01 - 10), date!(2025 - 02 - 01)]);

        let all = db
            .query_repairs(GetRepairsDto {
                from: None,
                to: None,
                max_cost: None,
            })
            .await?;
        assert_eq!(all.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn repair_requires_known_vehicle() {
        let db = MemoryDatabase::new();
        let error = db
            .register_repair(repair(Uuid::new_v4(), date!(2025 - 03 - 01), 10))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);
    }

    #[tokio::test]
    async fn invalid_repairs_are_rejected() {
        let db = MemoryDatabase::new();
        let error = db
            .register_repair(repair(Uuid::new_v4(), date!(2025 - 03 - 01), -5))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidInput);

        let error = db
            .query_repairs(GetRepairsDto {
                from: Some(date!(2025 - 03 - 01)),
                to: Some(date!(2025 - 01 - 01)),
                max_cost: None,
            })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidInput);
    }
}
