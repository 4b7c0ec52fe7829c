use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

const BAD_RETURN: &str = "Vehicle returned in bad condition";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AlertDescription(String);

impl AlertDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn bad_return() -> Self {
        Self::new(BAD_RETURN)
    }
}
