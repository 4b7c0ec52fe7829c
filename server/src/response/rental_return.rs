use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::ReturnDto;
use kernel::prelude::entity::VehicleCondition;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct ReturnResponse {
    id: Uuid,
    rental_id: Uuid,
    returned_on: Date,
    condition: VehicleCondition,
    notes: Option<String>,
}

impl From<ReturnDto> for ReturnResponse {
    fn from(value: ReturnDto) -> Self {
        Self {
            id: value.id,
            rental_id: value.rental_id,
            returned_on: value.returned_on,
            condition: value.condition,
            notes: value.notes,
        }
    }
}

pub struct CreatedReturnResponse(ReturnResponse);

impl IntoResponse for CreatedReturnResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct ReturnPresenter;

impl Exhaust<ReturnDto> for ReturnPresenter {
    type To = CreatedReturnResponse;
    fn emit(&self, input: ReturnDto) -> Self::To {
        CreatedReturnResponse(ReturnResponse::from(input))
    }
}

impl Exhaust<Vec<ReturnDto>> for ReturnPresenter {
    type To = Json<Vec<ReturnResponse>>;
    fn emit(&self, input: Vec<ReturnDto>) -> Self::To {
        Json(input.into_iter().map(ReturnResponse::from).collect())
    }
}
