mod contact;
mod id;
mod name;

pub use self::{contact::*, id::*, name::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
pub struct Customer {
    id: CustomerId,
    first_name: CustomerFirstName,
    last_name: CustomerLastName,
    phone: Option<CustomerPhone>,
    address: Option<CustomerAddress>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        first_name: CustomerFirstName,
        last_name: CustomerLastName,
        phone: Option<CustomerPhone>,
        address: Option<CustomerAddress>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            phone,
            address,
        }
    }
}
