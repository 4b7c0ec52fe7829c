use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnRentalQuery, DependOnVehicleQuery, RentalQuery, VehicleQuery,
};
use kernel::interface::update::{DependOnVehicleModifier, VehicleModifier};
use kernel::prelude::entity::{
    Vehicle, VehicleAvailability, VehicleBrand, VehicleId, VehicleModel, VehicleYear,
};
use kernel::KernelError;

use crate::service::ensure_filled;
use crate::transfer::{
    CreateVehicleDto, DeleteVehicleDto, GetAllVehicleDto, GetVehicleDto, UpdateVehicleDto,
    VehicleDto,
};

fn vehicle_not_found(id: &VehicleId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Vehicle {id} not found"))
}

#[async_trait::async_trait]
pub trait GetVehicleService: 'static + Sync + Send + DependOnVehicleQuery {
    async fn get_vehicle(
        &self,
        dto: GetVehicleDto,
    ) -> error_stack::Result<Option<VehicleDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let id = VehicleId::new(dto.id);
        let vehicle = self.vehicle_query().find_by_id(&mut con, &id).await?;
        Ok(vehicle.map(VehicleDto::from))
    }

    async fn list_vehicles(
        &self,
        dto: GetAllVehicleDto,
    ) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let vehicles = self
            .vehicle_query()
            .find_all(&mut con, &dto.limit, &dto.offset)
            .await?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    async fn list_available_vehicles(&self) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let vehicles = self.vehicle_query().find_available(&mut con).await?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }
}

impl<T> GetVehicleService for T where T: DependOnVehicleQuery {}

#[async_trait::async_trait]
pub trait CreateVehicleService: 'static + Sync + Send + DependOnVehicleModifier {
    async fn register_vehicle(
        &self,
        dto: CreateVehicleDto,
    ) -> error_stack::Result<VehicleDto, KernelError> {
        ensure_filled("Brand", &dto.brand)?;
        ensure_filled("Model", &dto.model)?;

        let mut con = self.database_connection().transact().await?;
        let vehicle = Vehicle::new(
            VehicleId::new(Uuid::new_v4()),
            VehicleBrand::new(dto.brand),
            VehicleModel::new(dto.model),
            VehicleYear::new(dto.year),
            VehicleAvailability::default(),
        );
        self.vehicle_modifier().create(&mut con, &vehicle).await?;
        con.commit().await?;

        tracing::info!(vehicle = %vehicle.id(), "Vehicle registered");
        Ok(VehicleDto::from(vehicle))
    }
}

impl<T> CreateVehicleService for T where T: DependOnVehicleModifier {}

#[async_trait::async_trait]
pub trait UpdateVehicleService:
    'static + Sync + Send + DependOnVehicleQuery + DependOnVehicleModifier
{
    async fn update_vehicle(
        &self,
        dto: UpdateVehicleDto,
    ) -> error_stack::Result<VehicleDto, KernelError> {
        if let Some(brand) = &dto.brand {
            ensure_filled("Brand", brand)?;
        }
        if let Some(model) = &dto.model {
            ensure_filled("Model", model)?;
        }

        let mut con = self.database_connection().transact().await?;
        let id = VehicleId::new(dto.id);
        let mut vehicle = self
            .vehicle_query()
            .find_by_id_for_update(&mut con, &id)
            .await?
            .ok_or_else(|| vehicle_not_found(&id))?;

        vehicle.substitute(|vehicle| {
            if let Some(brand) = dto.brand {
                *vehicle.brand = VehicleBrand::new(brand);
            }
            if let Some(model) = dto.model {
                *vehicle.model = VehicleModel::new(model);
            }
            if let Some(year) = dto.year {
                *vehicle.year = VehicleYear::new(year);
            }
        });
        self.vehicle_modifier().update(&mut con, &vehicle).await?;
        con.commit().await?;

        tracing::info!(vehicle = %id, "Vehicle updated");
        Ok(VehicleDto::from(vehicle))
    }
}

impl<T> UpdateVehicleService for T where T: DependOnVehicleQuery + DependOnVehicleModifier {}

#[async_trait::async_trait]
pub trait DeleteVehicleService:
    'static + Sync + Send + DependOnVehicleQuery + DependOnVehicleModifier + DependOnRentalQuery
{
    async fn delete_vehicle(&self, dto: DeleteVehicleDto) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().transact().await?;
        let id = VehicleId::new(dto.id);
        self.vehicle_query()
            .find_by_id_for_update(&mut con, &id)
            .await?
            .ok_or_else(|| vehicle_not_found(&id))?;

        if let Some(rental) = self
            .rental_query()
            .find_active_by_vehicle_id(&mut con, &id)
            .await?
        {
            return Err(Report::new(KernelError::InvalidState).attach_printable(format!(
                "Vehicle {id} is under active rental {}",
                rental.id()
            )));
        }

        self.vehicle_modifier().delete(&mut con, &id).await?;
        con.commit().await?;

        tracing::info!(vehicle = %id, "Vehicle deleted");
        Ok(())
    }
}

impl<T> DeleteVehicleService for T where
    T: DependOnVehicleQuery + DependOnVehicleModifier + DependOnRentalQuery
{
}

#[cfg(test)]
mod test {
    use driver::database::MemoryDatabase;
    use kernel::prelude::entity::{SelectLimit, SelectOffset};
    use kernel::KernelError;
    use time::macros::date;

    use crate::service::{
        CreateCustomerService, CreateRentalService, CreateVehicleService, DeleteVehicleService,
        GetVehicleService, UpdateVehicleService,
    };
    use crate::transfer::{
        CreateCustomerDto, CreateRentalDto, CreateVehicleDto, DeleteVehicleDto,
        GetAllVehicleDto, GetVehicleDto, UpdateVehicleDto,
    };

    fn corolla() -> CreateVehicleDto {
        CreateVehicleDto {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
        }
    }

    #[tokio::test]
    async fn registered_vehicle_is_available() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = db.register_vehicle(corolla()).await?;
        assert!(vehicle.available);

        let found = db.get_vehicle(GetVehicleDto { id: vehicle.id }).await?;
        assert_eq!(found, Some(vehicle.clone()));

        let available = db.list_available_vehicles().await?;
        assert_eq!(available, vec![vehicle]);
        Ok(())
    }

    #[tokio::test]
    async fn blank_brand_is_rejected() {
        let db = MemoryDatabase::new();
        let mut dto = corolla();
        dto.brand = "  ".to_string();
        let error = db.register_vehicle(dto).await.unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidInput);
    }

    #[tokio::test]
    async fn listing_is_paged() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        for _ in 0..3 {
            db.register_vehicle(corolla()).await?;
        }
        let page = db
            .list_vehicles(GetAllVehicleDto {
                limit: SelectLimit::new(2),
                offset: SelectOffset::new(1),
            })
            .await?;
        assert_eq!(page.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_availability() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = db.register_vehicle(corolla()).await?;
        let updated = db
            .update_vehicle(UpdateVehicleDto {
                id: vehicle.id,
                brand: None,
                model: Some("Yaris".to_string()),
                year: None,
            })
            .await?;
        assert_eq!(updated.brand, "Toyota");
        assert_eq!(updated.model, "Yaris");
        assert!(updated.available);

        let error = db
            .update_vehicle(UpdateVehicleDto {
                id: uuid::Uuid::new_v4(),
                brand: None,
                model: None,
                year: Some(2001),
            })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn rented_vehicle_cannot_be_deleted() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = db.register_vehicle(corolla()).await?;
        let customer = db
            .register_customer(CreateCustomerDto {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone: None,
                address: None,
            })
            .await?;
        db.create_rental(CreateRentalDto {
            vehicle_id: vehicle.id,
            customer_id: customer.id,
            start_date: date!(2025 - 08 - 01),
            end_date: None,
            cost: 1000,
        })
        .await?;

        let error = db
            .delete_vehicle(DeleteVehicleDto { id: vehicle.id })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidState);
        assert!(db.get_vehicle(GetVehicleDto { id: vehicle.id }).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn idle_vehicle_is_deleted() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = db.register_vehicle(corolla()).await?;
        db.delete_vehicle(DeleteVehicleDto { id: vehicle.id }).await?;
        assert!(db.get_vehicle(GetVehicleDto { id: vehicle.id }).await?.is_none());

        let error = db
            .delete_vehicle(DeleteVehicleDto { id: vehicle.id })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);
        Ok(())
    }
}
