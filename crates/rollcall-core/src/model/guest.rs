use serde::{Deserialize, Serialize};

use super::ids::GuestId;

/// Guest - a person who can belong to events
///
/// A guest owns no references to its memberships; those are resolved by
/// foreign key through the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,

    /// Display name
    pub name: String,
}

impl Guest {
    pub fn new(id: GuestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
