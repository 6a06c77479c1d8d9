use super::store::Store;
use crate::model::{Event, EventId};

/// Create an event with the next free id
pub fn create_event(store: &mut Store, name: &str) -> Event {
    let event = Event::new(store.allocate_event_id(), name);
    store.events.insert(event.id, event.clone());
    tracing::debug!(event_id = event.id.get(), "event created");
    event
}

/// All events, id ascending
pub fn list_events(store: &Store) -> Vec<Event> {
    store.events.values().cloned().collect()
}

/// Delete an event and cascade to its memberships
///
/// Returns `false` if the event did not exist.
pub fn delete_event(store: &mut Store, id: EventId) -> bool {
    if store.events.remove(&id).is_none() {
        return false;
    }
    store.memberships.retain(|m| m.event_id != id);
    tracing::debug!(event_id = id.get(), "event deleted");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{guest_ops, membership_ops};

    #[test]
    fn test_list_events_in_id_order() {
        let mut store = Store::new();
        let meeting = create_event(&mut store, "Team meeting");
        let summit = create_event(&mut store, "Business Summit");
        assert_eq!(list_events(&store), vec![meeting, summit]);
    }

    #[test]
    fn test_delete_event_cascades() {
        let mut store = Store::new();
        let jeff = guest_ops::create_guest(&mut store, "Jeff");
        let meeting = create_event(&mut store, "Team meeting");
        let summit = create_event(&mut store, "Business Summit");
        membership_ops::add_membership(&mut store, jeff.id, meeting.id, "Speaker").unwrap();
        membership_ops::add_membership(&mut store, jeff.id, summit.id, "Attendee").unwrap();

        assert!(delete_event(&mut store, meeting.id));
        assert!(!delete_event(&mut store, meeting.id));

        assert_eq!(store.memberships().len(), 1);
        assert_eq!(store.memberships()[0].event_id, summit.id);
    }
}
