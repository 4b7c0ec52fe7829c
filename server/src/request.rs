mod customer;
mod rental;
mod rental_return;
mod repair;
mod vehicle;

pub use self::{customer::*, rental::*, rental_return::*, repair::*, vehicle::*};
