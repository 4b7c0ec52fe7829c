mod availability;
mod id;
mod make;

pub use self::{availability::*, id::*, make::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
pub struct Vehicle {
    id: VehicleId,
    brand: VehicleBrand,
    model: VehicleModel,
    year: VehicleYear,
    availability: VehicleAvailability,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        brand: VehicleBrand,
        model: VehicleModel,
        year: VehicleYear,
        availability: VehicleAvailability,
    ) -> Self {
        Self {
            id,
            brand,
            model,
            year,
            availability,
        }
    }

    pub fn is_available(&self) -> bool {
        *self.availability.as_ref()
    }
}
