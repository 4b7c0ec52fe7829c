use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::VehicleDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    id: Uuid,
    brand: String,
    model: String,
    year: i32,
    available: bool,
}

impl From<VehicleDto> for VehicleResponse {
    fn from(value: VehicleDto) -> Self {
        Self {
            id: value.id,
            brand: value.brand,
            model: value.model,
            year: value.year,
            available: value.available,
        }
    }
}

impl IntoResponse for VehicleResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CreatedVehicleResponse(VehicleResponse);

impl IntoResponse for CreatedVehicleResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct VehiclePresenter;

impl Exhaust<()> for VehiclePresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<VehicleDto> for VehiclePresenter {
    type To = VehicleResponse;
    fn emit(&self, input: VehicleDto) -> Self::To {
        VehicleResponse::from(input)
    }
}

impl Exhaust<Option<VehicleDto>> for VehiclePresenter {
    type To = Option<VehicleResponse>;
    fn emit(&self, input: Option<VehicleDto>) -> Self::To {
        input.map(VehicleResponse::from)
    }
}

impl Exhaust<Vec<VehicleDto>> for VehiclePresenter {
    type To = Json<Vec<VehicleResponse>>;
    fn emit(&self, input: Vec<VehicleDto>) -> Self::To {
        Json(input.into_iter().map(VehicleResponse::from).collect())
    }
}

pub struct CreatedVehiclePresenter;

impl Exhaust<VehicleDto> for CreatedVehiclePresenter {
    type To = CreatedVehicleResponse;
    fn emit(&self, input: VehicleDto) -> Self::To {
        CreatedVehicleResponse(VehicleResponse::from(input))
    }
}
