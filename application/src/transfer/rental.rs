use kernel::prelude::entity::{DestructRental, Rental, RentalStatus};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub cost: i64,
    pub status: RentalStatus,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            vehicle_id,
            customer_id,
            start_date,
            end_date,
            cost,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            customer_id: customer_id.into(),
            start_date: start_date.into(),
            end_date: end_date.map(Date::from),
            cost: cost.into(),
            status,
        }
    }
}

pub struct CreateRentalDto {
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub cost: i64,
}

/// Only `start_date`, `end_date` and `cost` can be amended.
pub struct UpdateRentalDto {
    pub id: Uuid,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub cost: Option<i64>,
}

pub struct GetRentalDto {
    pub id: Uuid,
}

pub struct GetRecentRentalsDto {
    pub months: u32,
    pub as_of: Date,
}
