use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::RentalDto;
use kernel::prelude::entity::RentalStatus;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    id: Uuid,
    vehicle_id: Uuid,
    customer_id: Uuid,
    start_date: Date,
    end_date: Option<Date>,
    cost: i64,
    status: RentalStatus,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            vehicle_id: value.vehicle_id,
            customer_id: value.customer_id,
            start_date: value.start_date,
            end_date: value.end_date,
            cost: value.cost,
            status: value.status,
        }
    }
}

impl IntoResponse for RentalResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CreatedRentalResponse(RentalResponse);

impl IntoResponse for CreatedRentalResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct RentalPresenter;

impl Exhaust<RentalDto> for RentalPresenter {
    type To = RentalResponse;
    fn emit(&self, input: RentalDto) -> Self::To {
        RentalResponse::from(input)
    }
}

impl Exhaust<Option<RentalDto>> for RentalPresenter {
    type To = Option<RentalResponse>;
    fn emit(&self, input: Option<RentalDto>) -> Self::To {
        input.map(RentalResponse::from)
    }
}

impl Exhaust<Vec<RentalDto>> for RentalPresenter {
    type To = Json<Vec<RentalResponse>>;
    fn emit(&self, input: Vec<RentalDto>) -> Self::To {
        Json(input.into_iter().map(RentalResponse::from).collect())
    }
}

pub struct CreatedRentalPresenter;

impl Exhaust<RentalDto> for CreatedRentalPresenter {
    type To = CreatedRentalResponse;
    fn emit(&self, input: RentalDto) -> Self::To {
        CreatedRentalResponse(RentalResponse::from(input))
    }
}
