use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ReturnedOn(Date);

impl ReturnedOn {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
