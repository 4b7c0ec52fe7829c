use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{GetRepairsDto, RegisterRepairDto};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct RegisterRepairRequest {
    vehicle_id: Uuid,
    performed_on: Date,
    description: String,
    cost: i64,
}

#[derive(Debug, Deserialize)]
pub struct GetRepairsRequest {
    from: Option<Date>,
    to: Option<Date>,
    max_cost: Option<i64>,
}

pub struct RepairTransformer;

impl Intake<RegisterRepairRequest> for RepairTransformer {
    type To = RegisterRepairDto;
    fn emit(&self, input: RegisterRepairRequest) -> Self::To {
        RegisterRepairDto {
            vehicle_id: input.vehicle_id,
            performed_on: input.performed_on,
            description: input.description,
            cost: input.cost,
        }
    }
}

impl Intake<GetRepairsRequest> for RepairTransformer {
    type To = GetRepairsDto;
    fn emit(&self, input: GetRepairsRequest) -> Self::To {
        GetRepairsDto {
            from: input.from,
            to: input.to,
            max_cost: input.max_cost,
        }
    }
}
