use serde::Deserialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use application::transfer::{
    CreateRentalDto, GetRecentRentalsDto, GetRentalDto, UpdateRentalDto,
};
use kernel::prelude::entity::RecentWindow;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    vehicle_id: Uuid,
    customer_id: Uuid,
    start_date: Date,
    end_date: Option<Date>,
    cost: i64,
}

/// Vehicle and customer are fixed once a rental is opened.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRentalRequest {
    start_date: Option<Date>,
    end_date: Option<Date>,
    cost: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GetRecentRentalsRequest {
    months: Option<u32>,
}

#[derive(Debug)]
pub struct GetRentalRequest {
    id: Uuid,
}

impl GetRentalRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct RentalTransformer;

impl Intake<CreateRentalRequest> for RentalTransformer {
    type To = CreateRentalDto;
    fn emit(&self, input: CreateRentalRequest) -> Self::To {
        CreateRentalDto {
            vehicle_id: input.vehicle_id,
            customer_id: input.customer_id,
            start_date: input.start_date,
            end_date: input.end_date,
            cost: input.cost,
        }
    }
}

impl Intake<(Uuid, UpdateRentalRequest)> for RentalTransformer {
    type To = UpdateRentalDto;
    fn emit(&self, (id, input): (Uuid, UpdateRentalRequest)) -> Self::To {
        UpdateRentalDto {
            id,
            start_date: input.start_date,
            end_date: input.end_date,
            cost: input.cost,
        }
    }
}

impl Intake<GetRentalRequest> for RentalTransformer {
    type To = GetRentalDto;
    fn emit(&self, input: GetRentalRequest) -> Self::To {
        GetRentalDto { id: input.id }
    }
}

/// The window falls back to the configured one and ends today (UTC).
impl Intake<(GetRecentRentalsRequest, RecentWindow)> for RentalTransformer {
    type To = GetRecentRentalsDto;
    fn emit(&self, (input, window): (GetRecentRentalsRequest, RecentWindow)) -> Self::To {
        GetRecentRentalsDto {
            months: input.months.unwrap_or(*window.as_ref()),
            as_of: OffsetDateTime::now_utc().date(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use time::macros::date;
    use uuid::Uuid;

    use kernel::prelude::entity::RecentWindow;
    use kernel::KernelError;

    use crate::controller::Intake;
    use crate::request::{
        CreateRentalRequest, GetRecentRentalsRequest, RentalTransformer, UpdateRentalRequest,
    };

    #[test]
    fn create_request_reads_iso_dates() {
        let vehicle = Uuid::new_v4();
        let customer = Uuid::new_v4();
        let req: CreateRentalRequest = serde_json::from_value(json!({
            "vehicle_id": vehicle,
            "customer_id": customer,
            "start_date": "2024-03-01",
            "cost": 250
        }))
        .unwrap();
        let dto = RentalTransformer.emit(req);
        assert_eq!(dto.vehicle_id, vehicle);
        assert_eq!(dto.start_date, date!(2024 - 03 - 01));
        assert_eq!(dto.end_date, None);
        assert_eq!(dto.cost, 250);
    }

    #[test]
    fn update_request_cannot_move_rental() {
        let result = serde_json::from_value::<UpdateRentalRequest>(json!({
            "vehicle_id": Uuid::new_v4()
        }));
        assert!(result.is_err());
    }

    #[test]
    fn recent_window_falls_back_to_configured() -> error_stack::Result<(), KernelError> {
        let window = RecentWindow::new(6u32)?;

        let dto = RentalTransformer.emit((GetRecentRentalsRequest { months: None }, window));
        assert_eq!(dto.months, 6);

        let dto = RentalTransformer.emit((GetRecentRentalsRequest { months: Some(2) }, window));
        assert_eq!(dto.months, 2);
        Ok(())
    }
}
