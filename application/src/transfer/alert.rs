use kernel::prelude::entity::{Alert, DestructAlert, VehicleCondition};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub rental_id: Uuid,
    pub condition: VehicleCondition,
    pub description: String,
    pub created_at: OffsetDateTime,
}

impl From<Alert> for AlertDto {
    fn from(value: Alert) -> Self {
        let DestructAlert {
            id,
            vehicle_id,
            rental_id,
            condition,
            description,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            rental_id: rental_id.into(),
            condition,
            description: description.into(),
            created_at: created_at.into(),
        }
    }
}
