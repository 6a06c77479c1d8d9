use serde::{Deserialize, Serialize};

use super::{Event, Guest};

/// One row of the top-guests ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRanking {
    pub guest: Guest,

    /// Number of memberships the guest holds
    pub event_count: usize,

    /// Every event the guest is a member of, in membership insertion order
    pub events: Vec<Event>,
}
