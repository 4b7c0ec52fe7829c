use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::AlertDto;
use kernel::prelude::entity::VehicleCondition;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    id: Uuid,
    vehicle_id: Uuid,
    rental_id: Uuid,
    condition: VehicleCondition,
    description: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<AlertDto> for AlertResponse {
    fn from(value: AlertDto) -> Self {
        Self {
            id: value.id,
            vehicle_id: value.vehicle_id,
            rental_id: value.rental_id,
            condition: value.condition,
            description: value.description,
            created_at: value.created_at,
        }
    }
}

pub struct AlertPresenter;

impl Exhaust<Vec<AlertDto>> for AlertPresenter {
    type To = Json<Vec<AlertResponse>>;
    fn emit(&self, input: Vec<AlertDto>) -> Self::To {
        Json(input.into_iter().map(AlertResponse::from).collect())
    }
}
