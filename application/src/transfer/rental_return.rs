use kernel::prelude::entity::{DestructRentalReturn, RentalReturn, VehicleCondition};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDto {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub returned_on: Date,
    pub condition: VehicleCondition,
    pub notes: Option<String>,
}

impl From<RentalReturn> for ReturnDto {
    fn from(value: RentalReturn) -> Self {
        let DestructRentalReturn {
            id,
            rental_id,
            returned_on,
            condition,
            notes,
        } = value.into_destruct();
        Self {
            id: id.into(),
            rental_id: rental_id.into(),
            returned_on: returned_on.into(),
            condition,
            notes: notes.map(String::from),
        }
    }
}

pub struct RegisterReturnDto {
    pub rental_id: Uuid,
    pub returned_on: Date,
    pub condition: VehicleCondition,
    pub notes: Option<String>,
}
