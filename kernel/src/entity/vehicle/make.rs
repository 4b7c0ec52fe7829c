use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleBrand(String);

impl VehicleBrand {
    pub fn new(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleModel(String);

impl VehicleModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleYear(i32);

impl VehicleYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
