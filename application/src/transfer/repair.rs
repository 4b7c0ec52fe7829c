use kernel::prelude::entity::{DestructRepair, Repair};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairDto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub performed_on: Date,
    pub description: String,
    pub cost: i64,
}

impl From<Repair> for RepairDto {
    fn from(value: Repair) -> Self {
        let DestructRepair {
            id,
            vehicle_id,
            performed_on,
            description,
            cost,
        } = value.into_destruct();
        Self {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            performed_on: performed_on.into(),
            description: description.into(),
            cost: cost.into(),
        }
    }
}

pub struct RegisterRepairDto {
    pub vehicle_id: Uuid,
    pub performed_on: Date,
    pub description: String,
    pub cost: i64,
}

pub struct GetRepairsDto {
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub max_cost: Option<i64>,
}
