//! Repository seam between the directory and its storage
//!
//! `DirectoryBackend` is the full create/read/update/delete and query surface
//! the directory needs. Two implementations exist: the in-memory
//! [`Store`](crate::ops::Store) in this crate and the SQLite-backed directory
//! in `rollcall-store`. Both must answer every query identically, including
//! ordering.

use crate::errors::ExError;
use crate::model::{Event, EventId, Guest, GuestId, GuestRanking, Membership};

/// Result type for backend calls
pub type BackendResult<T> = std::result::Result<T, ExError>;

/// Storage backend for guests, events and memberships
///
/// Every method is one unit of work: it either applies completely or leaves
/// the stored rows untouched.
///
/// Ordering contract:
/// - `list_guests` / `list_events`: id ascending
/// - membership-derived lists: membership insertion order
/// - `top_guests`: membership count descending, then guest id ascending
pub trait DirectoryBackend {
    // ----- guests -----

    /// Insert a guest and return it with its assigned id
    fn create_guest(&mut self, name: &str) -> BackendResult<Guest>;

    fn get_guest(&self, id: GuestId) -> BackendResult<Option<Guest>>;

    fn list_guests(&self) -> BackendResult<Vec<Guest>>;

    /// Delete a guest and every membership referencing it.
    ///
    /// Returns `false` if no such guest existed.
    fn delete_guest(&mut self, id: GuestId) -> BackendResult<bool>;

    // ----- events -----

    /// Insert an event and return it with its assigned id
    fn create_event(&mut self, name: &str) -> BackendResult<Event>;

    fn get_event(&self, id: EventId) -> BackendResult<Option<Event>>;

    fn list_events(&self) -> BackendResult<Vec<Event>>;

    /// Delete an event and every membership referencing it.
    ///
    /// Returns `false` if no such event existed.
    fn delete_event(&mut self, id: EventId) -> BackendResult<bool>;

    // ----- memberships -----

    fn get_membership(
        &self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<Option<Membership>>;

    fn list_memberships(&self) -> BackendResult<Vec<Membership>>;

    /// Link a guest to an event with a role.
    ///
    /// # Errors
    ///
    /// `NotFound` if the guest or the event is missing (guest checked first),
    /// `ConstraintViolation` if the pair is already linked.
    fn add_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        role: &str,
    ) -> BackendResult<()>;

    /// Overwrite the role of an existing membership.
    ///
    /// A missing membership is a no-op; the return value says whether a row
    /// was updated.
    fn change_membership_role(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        new_role: &str,
    ) -> BackendResult<bool>;

    /// Delete a membership. Missing membership is a no-op returning `false`.
    fn remove_membership(&mut self, guest_id: GuestId, event_id: EventId)
        -> BackendResult<bool>;

    // ----- queries -----

    fn list_guests_for_event(&self, event_id: EventId) -> BackendResult<Vec<Guest>>;

    fn list_events_for_guest(&self, guest_id: GuestId) -> BackendResult<Vec<Event>>;

    /// Events reached through every membership whose role equals `role`
    /// exactly. One entry per membership; duplicates are kept.
    fn list_events_for_role(&self, role: &str) -> BackendResult<Vec<Event>>;

    /// The `n` guests holding the most memberships, with their events
    fn top_guests(&self, n: usize) -> BackendResult<Vec<GuestRanking>>;
}
