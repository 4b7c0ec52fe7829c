use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::RepairDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct RepairResponse {
    id: Uuid,
    vehicle_id: Uuid,
    performed_on: Date,
    description: String,
    cost: i64,
}

impl From<RepairDto> for RepairResponse {
    fn from(value: RepairDto) -> Self {
        Self {
            id: value.id,
            vehicle_id: value.vehicle_id,
            performed_on: value.performed_on,
            description: value.description,
            cost: value.cost,
        }
    }
}

pub struct CreatedRepairResponse(RepairResponse);

impl IntoResponse for CreatedRepairResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct RepairPresenter;

impl Exhaust<RepairDto> for RepairPresenter {
    type To = CreatedRepairResponse;
    fn emit(&self, input: RepairDto) -> Self::To {
        CreatedRepairResponse(RepairResponse::from(input))
    }
}

impl Exhaust<Vec<RepairDto>> for RepairPresenter {
    type To = Json<Vec<RepairResponse>>;
    fn emit(&self, input: Vec<RepairDto>) -> Self::To {
        Json(input.into_iter().map(RepairResponse::from).collect())
    }
}
