use std::collections::BTreeMap;

use crate::backend::{BackendResult, DirectoryBackend};
use crate::errors::{DirectoryError, Result};
use crate::model::{Event, EventId, Guest, GuestId, GuestRanking, Membership};

use super::{event_ops, guest_ops, membership_ops, query_ops};

/// In-memory store for guests, events and memberships
///
/// Guests and events are keyed by id; memberships are kept in a Vec so the
/// insertion order the queries report is the order rows were added.
/// Not thread-safe - designed for single-threaded use and tests.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) guests: BTreeMap<GuestId, Guest>,
    pub(crate) events: BTreeMap<EventId, Event>,
    pub(crate) memberships: Vec<Membership>,
    next_guest_id: i64,
    next_event_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a new empty Store. Ids start at 1, like SQLite rowids.
    pub fn new() -> Self {
        Self {
            guests: BTreeMap::new(),
            events: BTreeMap::new(),
            memberships: Vec::new(),
            next_guest_id: 1,
            next_event_id: 1,
        }
    }

    pub(crate) fn allocate_guest_id(&mut self) -> GuestId {
        let id = GuestId(self.next_guest_id);
        self.next_guest_id += 1;
        id
    }

    pub(crate) fn allocate_event_id(&mut self) -> EventId {
        let id = EventId(self.next_event_id);
        self.next_event_id += 1;
        id
    }

    /// Get a Guest by ID, failing if it is absent
    ///
    /// # Errors
    ///
    /// Returns `GuestNotFound` if the guest doesn't exist.
    pub fn require_guest(&self, id: GuestId) -> Result<&Guest> {
        self.guests
            .get(&id)
            .ok_or(DirectoryError::GuestNotFound { guest_id: id })
    }

    /// Get an Event by ID, failing if it is absent
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event doesn't exist.
    pub fn require_event(&self, id: EventId) -> Result<&Event> {
        self.events
            .get(&id)
            .ok_or(DirectoryError::EventNotFound { event_id: id })
    }

    /// Find the membership for a (guest, event) pair, if any
    pub fn find_membership(&self, guest_id: GuestId, event_id: EventId) -> Option<&Membership> {
        self.memberships
            .iter()
            .find(|m| m.links(guest_id, event_id))
    }

    pub(crate) fn find_membership_mut(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> Option<&mut Membership> {
        self.memberships
            .iter_mut()
            .find(|m| m.links(guest_id, event_id))
    }

    /// Insert a guest directly (test setup and hydration)
    pub fn insert_guest(&mut self, guest: Guest) {
        if guest.id.0 >= self.next_guest_id {
            self.next_guest_id = guest.id.0 + 1;
        }
        self.guests.insert(guest.id, guest);
    }

    /// Insert an event directly (test setup and hydration)
    pub fn insert_event(&mut self, event: Event) {
        if event.id.0 >= self.next_event_id {
            self.next_event_id = event.id.0 + 1;
        }
        self.events.insert(event.id, event);
    }

    /// All memberships in insertion order
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl DirectoryBackend for Store {
    fn create_guest(&mut self, name: &str) -> BackendResult<Guest> {
        Ok(guest_ops::create_guest(self, name))
    }

    fn get_guest(&self, id: GuestId) -> BackendResult<Option<Guest>> {
        Ok(self.guests.get(&id).cloned())
    }

    fn list_guests(&self) -> BackendResult<Vec<Guest>> {
        Ok(guest_ops::list_guests(self))
    }

    fn delete_guest(&mut self, id: GuestId) -> BackendResult<bool> {
        Ok(guest_ops::delete_guest(self, id))
    }

    fn create_event(&mut self, name: &str) -> BackendResult<Event> {
        Ok(event_ops::create_event(self, name))
    }

    fn get_event(&self, id: EventId) -> BackendResult<Option<Event>> {
        Ok(self.events.get(&id).cloned())
    }

    fn list_events(&self) -> BackendResult<Vec<Event>> {
        Ok(event_ops::list_events(self))
    }

    fn delete_event(&mut self, id: EventId) -> BackendResult<bool> {
        Ok(event_ops::delete_event(self, id))
    }

    fn get_membership(
        &self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<Option<Membership>> {
        Ok(self.find_membership(guest_id, event_id).cloned())
    }

    fn list_memberships(&self) -> BackendResult<Vec<Membership>> {
        Ok(self.memberships.clone())
    }

    fn add_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        role: &str,
    ) -> BackendResult<()> {
        Ok(membership_ops::add_membership(self, guest_id, event_id, role)?)
    }

    fn change_membership_role(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        new_role: &str,
    ) -> BackendResult<bool> {
        Ok(membership_ops::change_membership_role(
            self, guest_id, event_id, new_role,
        ))
    }

    fn remove_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<bool> {
        Ok(membership_ops::remove_membership(self, guest_id, event_id))
    }

    fn list_guests_for_event(&self, event_id: EventId) -> BackendResult<Vec<Guest>> {
        Ok(query_ops::list_guests_for_event(self, event_id)?)
    }

    fn list_events_for_guest(&self, guest_id: GuestId) -> BackendResult<Vec<Event>> {
        Ok(query_ops::list_events_for_guest(self, guest_id)?)
    }

    fn list_events_for_role(&self, role: &str) -> BackendResult<Vec<Event>> {
        Ok(query_ops::list_events_for_role(self, role)?)
    }

    fn top_guests(&self, n: usize) -> BackendResult<Vec<GuestRanking>> {
        Ok(query_ops::top_guests(self, n)?)
    }
}
