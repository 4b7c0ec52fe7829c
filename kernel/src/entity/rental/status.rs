use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const ACTIVE: &str = "active";
const CLOSED: &str = "closed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    /// Terminal. Reached once the vehicle has been returned.
    Closed,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => ACTIVE,
            RentalStatus::Closed => CLOSED,
        }
    }
}

impl Display for RentalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalStatus {
    type Err = Report<KernelError>;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ACTIVE => Ok(RentalStatus::Active),
            CLOSED => Ok(RentalStatus::Closed),
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown rental status: {other}"))),
        }
    }
}
