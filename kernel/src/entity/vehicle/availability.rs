use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// `true` while no active rental references the vehicle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleAvailability(bool);

impl VehicleAvailability {
    pub fn new(available: impl Into<bool>) -> Self {
        Self(available.into())
    }
}

impl Default for VehicleAvailability {
    fn default() -> Self {
        Self(true)
    }
}
