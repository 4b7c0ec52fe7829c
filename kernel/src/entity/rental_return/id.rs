use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ReturnId(Uuid);

impl ReturnId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
