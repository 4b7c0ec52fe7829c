use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::RegisterReturnDto;
use kernel::prelude::entity::VehicleCondition;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct RegisterReturnRequest {
    rental_id: Uuid,
    returned_on: Date,
    condition: VehicleCondition,
    notes: Option<String>,
}

pub struct ReturnTransformer;

impl Intake<RegisterReturnRequest> for ReturnTransformer {
    type To = RegisterReturnDto;
    fn emit(&self, input: RegisterReturnRequest) -> Self::To {
        RegisterReturnDto {
            rental_id: input.rental_id,
            returned_on: input.returned_on,
            condition: input.condition,
            notes: input.notes,
        }
    }
}
