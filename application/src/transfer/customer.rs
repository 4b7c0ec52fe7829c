use kernel::prelude::entity::{Customer, DestructCustomer, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<Customer> for CustomerDto {
    fn from(value: Customer) -> Self {
        let DestructCustomer {
            id,
            first_name,
            last_name,
            phone,
            address,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.map(String::from),
            address: address.map(String::from),
        }
    }
}

pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub struct GetCustomerDto {
    pub id: Uuid,
}

pub struct GetAllCustomerDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct UpdateCustomerDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub struct DeleteCustomerDto {
    pub id: Uuid,
}
