use error_stack::Report;

use kernel::interface::query::VehicleQuery;
use kernel::interface::update::VehicleModifier;
use kernel::prelude::entity::{
    DestructVehicle, SelectLimit, SelectOffset, Vehicle, VehicleAvailability, VehicleId,
};
use kernel::KernelError;

use crate::database::memory::{paginate, MemoryTransaction};

pub struct MemoryVehicleRepository;

fn not_found(id: &VehicleId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Vehicle {id} not found"))
}

#[async_trait::async_trait]
impl VehicleQuery for MemoryVehicleRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        Ok(con
            .store()
            .vehicles
            .iter()
            .find(|vehicle| vehicle.id() == id)
            .cloned())
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut MemoryTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        con.lock().await;
        self.find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        Ok(paginate(&con.store().vehicles, limit, offset))
    }

    async fn find_available(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        Ok(con
            .store()
            .vehicles
            .iter()
            .filter(|vehicle| vehicle.is_available())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl VehicleModifier for MemoryVehicleRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        let vehicles = &mut con.lock().await.vehicles;
        if vehicles.iter().any(|stored| stored.id() == vehicle.id()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("Vehicle {} already exists", vehicle.id())));
        }
        vehicles.push(vehicle.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .lock()
            .await
            .vehicles
            .iter_mut()
            .find(|stored| stored.id() == vehicle.id())
            .ok_or_else(|| not_found(vehicle.id()))?;
        let DestructVehicle {
            brand, model, year, ..
        } = vehicle.clone().into_destruct();
        stored.substitute(|stored| {
            *stored.brand = brand;
            *stored.model = model;
            *stored.year = year;
        });
        Ok(())
    }

    async fn set_available(
        &self,
        con: &mut MemoryTransaction,
        id: &VehicleId,
        availability: &VehicleAvailability,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .lock()
            .await
            .vehicles
            .iter_mut()
            .find(|stored| stored.id() == id)
            .ok_or_else(|| not_found(id))?;
        stored.substitute(|stored| *stored.availability = *availability);
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<(), KernelError> {
        con.lock().await.vehicles.retain(|vehicle| vehicle.id() != id);
        Ok(())
    }
}
