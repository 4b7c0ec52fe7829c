use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    CreateVehicleDto, DeleteVehicleDto, GetAllVehicleDto, GetVehicleDto, UpdateVehicleDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};

use crate::controller::Intake;

/// New vehicles always start available.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateVehicleRequest {
    brand: String,
    model: String,
    year: i32,
}

/// `available` is owned by the rental lifecycle and cannot be patched here.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateVehicleRequest {
    brand: Option<String>,
    model: Option<String>,
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct GetAllVehicleRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug)]
pub struct VehicleIdRequest {
    id: Uuid,
}

impl VehicleIdRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct VehicleTransformer;

impl Intake<CreateVehicleRequest> for VehicleTransformer {
    type To = CreateVehicleDto;
    fn emit(&self, input: CreateVehicleRequest) -> Self::To {
        CreateVehicleDto {
            brand: input.brand,
            model: input.model,
            year: input.year,
        }
    }
}

impl Intake<(Uuid, UpdateVehicleRequest)> for VehicleTransformer {
    type To = UpdateVehicleDto;
    fn emit(&self, (id, input): (Uuid, UpdateVehicleRequest)) -> Self::To {
        UpdateVehicleDto {
            id,
            brand: input.brand,
            model: input.model,
            year: input.year,
        }
    }
}

impl Intake<GetAllVehicleRequest> for VehicleTransformer {
    type To = GetAllVehicleDto;
    fn emit(&self, input: GetAllVehicleRequest) -> Self::To {
        GetAllVehicleDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<VehicleIdRequest> for VehicleTransformer {
    type To = GetVehicleDto;
    fn emit(&self, input: VehicleIdRequest) -> Self::To {
        GetVehicleDto { id: input.id }
    }
}

pub struct DeleteVehicleTransformer;

impl Intake<VehicleIdRequest> for DeleteVehicleTransformer {
    type To = DeleteVehicleDto;
    fn emit(&self, input: VehicleIdRequest) -> Self::To {
        DeleteVehicleDto { id: input.id }
    }
}
