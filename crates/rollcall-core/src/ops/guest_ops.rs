use super::store::Store;
use crate::model::{Guest, GuestId};

/// Create a guest with the next free id
pub fn create_guest(store: &mut Store, name: &str) -> Guest {
    let guest = Guest::new(store.allocate_guest_id(), name);
    store.guests.insert(guest.id, guest.clone());
    tracing::debug!(guest_id = guest.id.get(), "guest created");
    guest
}

/// All guests, id ascending
pub fn list_guests(store: &Store) -> Vec<Guest> {
    store.guests.values().cloned().collect()
}

/// Delete a guest and cascade to its memberships
///
/// Returns `false` if the guest did not exist.
pub fn delete_guest(store: &mut Store, id: GuestId) -> bool {
    if store.guests.remove(&id).is_none() {
        return false;
    }
    let before = store.memberships.len();
    store.memberships.retain(|m| m.guest_id != id);
    tracing::debug!(
        guest_id = id.get(),
        memberships_removed = before - store.memberships.len(),
        "guest deleted"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{event_ops, membership_ops};

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = Store::new();
        let jeff = create_guest(&mut store, "Jeff");
        let jane = create_guest(&mut store, "Jane");
        assert_eq!(jeff.id, GuestId(1));
        assert_eq!(jane.id, GuestId(2));
        assert_eq!(list_guests(&store), vec![jeff, jane]);
    }

    #[test]
    fn test_delete_cascades_to_memberships() {
        let mut store = Store::new();
        let jeff = create_guest(&mut store, "Jeff");
        let jane = create_guest(&mut store, "Jane");
        let meeting = event_ops::create_event(&mut store, "Team meeting");
        membership_ops::add_membership(&mut store, jeff.id, meeting.id, "Speaker").unwrap();
        membership_ops::add_membership(&mut store, jane.id, meeting.id, "Attendee").unwrap();

        assert!(delete_guest(&mut store, jeff.id));

        assert_eq!(store.memberships().len(), 1);
        assert_eq!(store.memberships()[0].guest_id, jane.id);
    }

    #[test]
    fn test_delete_missing_guest_is_noop() {
        let mut store = Store::new();
        assert!(!delete_guest(&mut store, GuestId(42)));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = Store::new();
        let first = create_guest(&mut store, "First");
        delete_guest(&mut store, first.id);
        let second = create_guest(&mut store, "Second");
        assert_ne!(first.id, second.id);
    }
}
