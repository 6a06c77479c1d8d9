use serde::{Deserialize, Serialize};

use super::ids::EventId;

/// Event - a gathering that guests can join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    /// Display name
    pub name: String,
}

impl Event {
    pub fn new(id: EventId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
