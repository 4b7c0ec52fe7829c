use kernel::prelude::entity::{DestructVehicle, SelectLimit, SelectOffset, Vehicle};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDto {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub available: bool,
}

impl From<Vehicle> for VehicleDto {
    fn from(value: Vehicle) -> Self {
        let DestructVehicle {
            id,
            brand,
            model,
            year,
            availability,
        } = value.into_destruct();
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            year: year.into(),
            available: availability.into(),
        }
    }
}

pub struct CreateVehicleDto {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

pub struct GetVehicleDto {
    pub id: Uuid,
}

pub struct GetAllVehicleDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct UpdateVehicleDto {
    pub id: Uuid,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

pub struct DeleteVehicleDto {
    pub id: Uuid,
}
