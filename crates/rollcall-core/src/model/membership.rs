use serde::{Deserialize, Serialize};

use super::ids::{EventId, GuestId};

/// Membership - links one Guest to one Event with a role
///
/// Identity is the `(guest_id, event_id)` pair; at most one membership exists
/// per pair. Both ids are plain foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub guest_id: GuestId,
    pub event_id: EventId,

    /// Free-form role label (e.g. "Speaker"). May be empty.
    pub role: String,
}

impl Membership {
    pub fn new(guest_id: GuestId, event_id: EventId, role: impl Into<String>) -> Self {
        Self {
            guest_id,
            event_id,
            role: role.into(),
        }
    }

    /// Check whether this membership joins the given pair
    pub fn links(&self, guest_id: GuestId, event_id: EventId) -> bool {
        self.guest_id == guest_id && self.event_id == event_id
    }
}
