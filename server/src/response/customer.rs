use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::CustomerDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    address: Option<String>,
}

impl From<CustomerDto> for CustomerResponse {
    fn from(value: CustomerDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            address: value.address,
        }
    }
}

impl IntoResponse for CustomerResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CreatedCustomerResponse(CustomerResponse);

impl IntoResponse for CreatedCustomerResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct CustomerPresenter;

impl Exhaust<()> for CustomerPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<CustomerDto> for CustomerPresenter {
    type To = CustomerResponse;
    fn emit(&self, input: CustomerDto) -> Self::To {
        CustomerResponse::from(input)
    }
}

impl Exhaust<Option<CustomerDto>> for CustomerPresenter {
    type To = Option<CustomerResponse>;
    fn emit(&self, input: Option<CustomerDto>) -> Self::To {
        input.map(CustomerResponse::from)
    }
}

impl Exhaust<Vec<CustomerDto>> for CustomerPresenter {
    type To = Json<Vec<CustomerResponse>>;
    fn emit(&self, input: Vec<CustomerDto>) -> Self::To {
        Json(input.into_iter().map(CustomerResponse::from).collect())
    }
}

pub struct CreatedCustomerPresenter;

impl Exhaust<CustomerDto> for CreatedCustomerPresenter {
    type To = CreatedCustomerResponse;
    fn emit(&self, input: CustomerDto) -> Self::To {
        CreatedCustomerResponse(CustomerResponse::from(input))
    }
}
