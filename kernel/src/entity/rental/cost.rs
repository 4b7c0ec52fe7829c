use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;
use error_stack::Report;

/// Amount in the smallest currency unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalCost(i64);

impl RentalCost {
    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into())
    }

    pub fn ensure_non_negative(&self) -> error_stack::Result<(), KernelError> {
        if self.0 < 0 {
            return Err(Report::new(KernelError::InvalidInput)
                .attach_printable(format!("Rental cost must not be negative: {}", self.0)));
        }
        Ok(())
    }
}
