use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct RepairDate(Date);

impl RepairDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RepairDescription(String);

impl RepairDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

/// Amount in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RepairCost(i64);

impl RepairCost {
    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into())
    }
}
