mod condition;
mod id;
mod notes;
mod returned_on;

pub use self::{condition::*, id::*, notes::*, returned_on::*};
use crate::entity::RentalId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// Record of a vehicle coming back. Written once per rental and never modified.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct RentalReturn {
    id: ReturnId,
    rental_id: RentalId,
    returned_on: ReturnedOn,
    condition: VehicleCondition,
    notes: Option<ReturnNotes>,
}

impl RentalReturn {
    pub fn new(
        id: ReturnId,
        rental_id: RentalId,
        returned_on: ReturnedOn,
        condition: VehicleCondition,
        notes: Option<ReturnNotes>,
    ) -> Self {
        Self {
            id,
            rental_id,
            returned_on,
            condition,
            notes,
        }
    }
}
