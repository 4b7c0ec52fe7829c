use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const GOOD: &str = "good";
const BAD: &str = "bad";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCondition {
    Good,
    /// Needs attention. Every return in this condition files an alert.
    Bad,
}

impl VehicleCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCondition::Good => GOOD,
            VehicleCondition::Bad => BAD,
        }
    }

    pub fn requires_alert(&self) -> bool {
        matches!(self, VehicleCondition::Bad)
    }
}

impl Display for VehicleCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCondition {
    type Err = Report<KernelError>;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            GOOD => Ok(VehicleCondition::Good),
            BAD => Ok(VehicleCondition::Bad),
            other => Err(Report::new(KernelError::InvalidInput)
                .attach_printable(format!("Unknown vehicle condition: {other}"))),
        }
    }
}
