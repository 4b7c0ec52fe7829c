use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Free-text observations taken when the vehicle comes back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ReturnNotes(String);

impl ReturnNotes {
    pub fn new(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }

    /// Blank input carries no observation and is dropped.
    pub fn non_blank(notes: Option<String>) -> Option<Self> {
        notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty())
            .map(Self)
    }
}
