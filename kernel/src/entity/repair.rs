mod detail;
mod filter;
mod id;

pub use self::{detail::*, filter::*, id::*};
use crate::entity::VehicleId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Repair {
    id: RepairId,
    vehicle_id: VehicleId,
    performed_on: RepairDate,
    description: RepairDescription,
    cost: RepairCost,
}

impl Repair {
    pub fn new(
        id: RepairId,
        vehicle_id: VehicleId,
        performed_on: RepairDate,
        description: RepairDescription,
        cost: RepairCost,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            performed_on,
            description,
            cost,
        }
    }
}
