mod description;
mod id;

pub use self::{description::*, id::*};
use crate::entity::{CreatedAt, RentalId, VehicleCondition, VehicleId};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Alert {
    id: AlertId,
    vehicle_id: VehicleId,
    rental_id: RentalId,
    condition: VehicleCondition,
    description: AlertDescription,
    created_at: CreatedAt<Alert>,
}

impl Alert {
    pub fn new(
        id: AlertId,
        vehicle_id: VehicleId,
        rental_id: RentalId,
        condition: VehicleCondition,
        description: AlertDescription,
        created_at: CreatedAt<Alert>,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            rental_id,
            condition,
            description,
            created_at,
        }
    }
}
