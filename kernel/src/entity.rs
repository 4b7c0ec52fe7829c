mod alert;
mod common;
mod customer;
mod rental;
mod rental_return;
mod repair;
mod vehicle;

pub use self::{
    alert::*, common::*, customer::*, rental::*, rental_return::*, repair::*, vehicle::*,
};
