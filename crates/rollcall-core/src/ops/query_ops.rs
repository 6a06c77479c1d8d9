//! Read-side operations over the in-memory store
//!
//! Each query is an explicit pass over the membership list followed by a
//! lookup of the referenced rows, so results come back in membership
//! insertion order.

use std::collections::HashMap;

use super::store::Store;
use crate::errors::Result;
use crate::model::{Event, EventId, Guest, GuestId, GuestRanking, Membership};

/// Guests linked to an event
pub fn list_guests_for_event(store: &Store, event_id: EventId) -> Result<Vec<Guest>> {
    store
        .memberships
        .iter()
        .filter(|m| m.event_id == event_id)
        .map(|m| store.require_guest(m.guest_id).cloned())
        .collect()
}

/// Events linked to a guest
pub fn list_events_for_guest(store: &Store, guest_id: GuestId) -> Result<Vec<Event>> {
    store
        .memberships
        .iter()
        .filter(|m| m.guest_id == guest_id)
        .map(|m| store.require_event(m.event_id).cloned())
        .collect()
}

/// Events reached through memberships whose role equals `role` exactly
///
/// One entry per matching membership; the same event may appear more than
/// once.
pub fn list_events_for_role(store: &Store, role: &str) -> Result<Vec<Event>> {
    store
        .memberships
        .iter()
        .filter(|m| m.role == role)
        .map(|m| store.require_event(m.event_id).cloned())
        .collect()
}

/// The `n` guests with the most memberships
pub fn top_guests(store: &Store, n: usize) -> Result<Vec<GuestRanking>> {
    rank_guests(&store.memberships, n)
        .into_iter()
        .map(|(guest_id, event_count)| {
            Ok(GuestRanking {
                guest: store.require_guest(guest_id)?.clone(),
                event_count,
                events: list_events_for_guest(store, guest_id)?,
            })
        })
        .collect()
}

/// Count memberships per guest and return the first `n` groups
///
/// Sorted by count descending; equal counts fall back to guest id ascending
/// so the ranking is deterministic.
pub fn rank_guests(memberships: &[Membership], n: usize) -> Vec<(GuestId, usize)> {
    let mut counts: HashMap<GuestId, usize> = HashMap::new();
    for m in memberships {
        *counts.entry(m.guest_id).or_insert(0) += 1;
    }

    let mut ranked: Vec<(GuestId, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(g: i64, e: i64, role: &str) -> Membership {
        Membership::new(GuestId(g), EventId(e), role)
    }

    #[test]
    fn test_rank_guests_orders_by_count_then_id() {
        let memberships = vec![m(3, 1, "a"), m(2, 1, "a"), m(2, 2, "a"), m(1, 1, "a")];
        let ranked = rank_guests(&memberships, 10);
        assert_eq!(
            ranked,
            vec![(GuestId(2), 2), (GuestId(1), 1), (GuestId(3), 1)]
        );
    }

    #[test]
    fn test_rank_guests_truncates() {
        let memberships = vec![m(1, 1, "a"), m(2, 1, "a"), m(3, 1, "a")];
        assert_eq!(rank_guests(&memberships, 2).len(), 2);
        assert!(rank_guests(&memberships, 0).is_empty());
    }

    #[test]
    fn test_rank_guests_empty() {
        assert!(rank_guests(&[], 5).is_empty());
    }
}
