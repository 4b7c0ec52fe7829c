use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    CreateCustomerDto, DeleteCustomerDto, GetAllCustomerDto, GetCustomerDto, UpdateCustomerDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    first_name: String,
    last_name: String,
    phone: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetAllCustomerRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug)]
pub struct CustomerIdRequest {
    id: Uuid,
}

impl CustomerIdRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct CustomerTransformer;

impl Intake<CreateCustomerRequest> for CustomerTransformer {
    type To = CreateCustomerDto;
    fn emit(&self, input: CreateCustomerRequest) -> Self::To {
        CreateCustomerDto {
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            address: input.address,
        }
    }
}

impl Intake<(Uuid, UpdateCustomerRequest)> for CustomerTransformer {
    type To = UpdateCustomerDto;
    fn emit(&self, (id, input): (Uuid, UpdateCustomerRequest)) -> Self::To {
        UpdateCustomerDto {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            address: input.address,
        }
    }
}

impl Intake<GetAllCustomerRequest> for CustomerTransformer {
    type To = GetAllCustomerDto;
    fn emit(&self, input: GetAllCustomerRequest) -> Self::To {
        GetAllCustomerDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<CustomerIdRequest> for CustomerTransformer {
    type To = GetCustomerDto;
    fn emit(&self, input: CustomerIdRequest) -> Self::To {
        GetCustomerDto { id: input.id }
    }
}

pub struct DeleteCustomerTransformer;

impl Intake<CustomerIdRequest> for DeleteCustomerTransformer {
    type To = DeleteCustomerDto;
    fn emit(&self, input: CustomerIdRequest) -> Self::To {
        DeleteCustomerDto { id: input.id }
    }
}
