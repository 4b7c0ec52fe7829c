mod alert;
mod customer;
mod rental;
mod rental_return;
mod repair;
mod vehicle;

pub use self::{alert::*, customer::*, rental::*, rental_return::*, repair::*, vehicle::*};

use error_stack::Report;
use kernel::KernelError;

fn ensure_filled(field: &str, value: &str) -> error_stack::Result<(), KernelError> {
    if value.trim().is_empty() {
        return Err(Report::new(KernelError::InvalidInput)
            .attach_printable(format!("{field} must not be blank")));
    }
    Ok(())
}

fn ensure_non_negative(field: &str, amount: i64) -> error_stack::Result<(), KernelError> {
    if amount < 0 {
        return Err(Report::new(KernelError::InvalidInput)
            .attach_printable(format!("{field} must not be negative: {amount}")));
    }
    Ok(())
}
