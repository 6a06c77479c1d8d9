//! The event/guest directory facade.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every directory operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Backends use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::time::Instant;

use rollcall_core::backend::{BackendResult, DirectoryBackend};
use rollcall_core::errors::ExError;
use rollcall_core::model::{Event, EventId, Guest, GuestId, GuestRanking, Membership};
use rollcall_core::{log_op_end, log_op_error, log_op_start, Store};
use rollcall_store::SqliteDirectory;

fn elapsed_ms(start: &Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Tag the error with the facade operation and log it
fn fail(op: &'static str, start: &Instant, err: ExError) -> ExError {
    let err = err.with_op(op);
    log_op_error!(op, err.clone(), duration_ms = elapsed_ms(start));
    err
}

/// Guests, events and their memberships over a storage backend
pub struct EventGuestDirectory<B: DirectoryBackend> {
    backend: B,
}

impl EventGuestDirectory<Store> {
    /// Directory over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Store::new())
    }
}

impl EventGuestDirectory<SqliteDirectory> {
    /// Directory over a SQLite database file (created and migrated if needed)
    ///
    /// # Errors
    ///
    /// `Io` if the parent directory cannot be created, `BackendFailure` on
    /// open or migration failure.
    pub fn open_sqlite<P: AsRef<Path>>(path: P) -> BackendResult<Self> {
        Ok(Self::new(SqliteDirectory::open(path)?))
    }

    /// Delete every row and restart ids
    pub fn reset(&mut self) -> BackendResult<()> {
        log_op_start!("reset");
        let start = Instant::now();
        self.backend
            .reset()
            .map_err(|e| fail("reset", &start, e))?;
        log_op_end!("reset", duration_ms = elapsed_ms(&start));
        Ok(())
    }
}

impl<B: DirectoryBackend> EventGuestDirectory<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ----- guests and events -----

    /// # Errors
    ///
    /// `BackendFailure` on storage errors.
    pub fn create_guest(&mut self, name: &str) -> BackendResult<Guest> {
        log_op_start!("create_guest");
        let start = Instant::now();
        let guest = self
            .backend
            .create_guest(name)
            .map_err(|e| fail("create_guest", &start, e))?;
        log_op_end!(
            "create_guest",
            duration_ms = elapsed_ms(&start),
            guest_id = guest.id.get()
        );
        Ok(guest)
    }

    pub fn get_guest(&self, id: GuestId) -> BackendResult<Option<Guest>> {
        self.backend.get_guest(id)
    }

    pub fn list_guests(&self) -> BackendResult<Vec<Guest>> {
        self.backend.list_guests()
    }

    /// Delete a guest and its memberships. `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// `BackendFailure` on storage errors.
    pub fn delete_guest(&mut self, id: GuestId) -> BackendResult<bool> {
        log_op_start!("delete_guest", guest_id = id.get());
        let start = Instant::now();
        let deleted = self
            .backend
            .delete_guest(id)
            .map_err(|e| fail("delete_guest", &start, e))?;
        log_op_end!(
            "delete_guest",
            duration_ms = elapsed_ms(&start),
            changed = deleted
        );
        Ok(deleted)
    }

    /// # Errors
    ///
    /// `BackendFailure` on storage errors.
    pub fn create_event(&mut self, name: &str) -> BackendResult<Event> {
        log_op_start!("create_event");
        let start = Instant::now();
        let event = self
            .backend
            .create_event(name)
            .map_err(|e| fail("create_event", &start, e))?;
        log_op_end!(
            "create_event",
            duration_ms = elapsed_ms(&start),
            event_id = event.id.get()
        );
        Ok(event)
    }

    pub fn get_event(&self, id: EventId) -> BackendResult<Option<Event>> {
        self.backend.get_event(id)
    }

    pub fn list_events(&self) -> BackendResult<Vec<Event>> {
        self.backend.list_events()
    }

    /// Delete an event and its memberships. `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// `BackendFailure` on storage errors.
    pub fn delete_event(&mut self, id: EventId) -> BackendResult<bool> {
        log_op_start!("delete_event", event_id = id.get());
        let start = Instant::now();
        let deleted = self
            .backend
            .delete_event(id)
            .map_err(|e| fail("delete_event", &start, e))?;
        log_op_end!(
            "delete_event",
            duration_ms = elapsed_ms(&start),
            changed = deleted
        );
        Ok(deleted)
    }

    pub fn get_membership(
        &self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<Option<Membership>> {
        self.backend.get_membership(guest_id, event_id)
    }

    pub fn list_memberships(&self) -> BackendResult<Vec<Membership>> {
        self.backend.list_memberships()
    }

    // ----- the seven directory operations -----

    /// Add a guest to an event with a role
    ///
    /// ## Errors
    ///
    /// - `NotFound`: guest or event missing
    /// - `ConstraintViolation`: the guest is already a member of the event
    /// - `BackendFailure`: storage error
    pub fn add_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        role: &str,
    ) -> BackendResult<()> {
        log_op_start!(
            "add_membership",
            guest_id = guest_id.get(),
            event_id = event_id.get(),
            role = role
        );
        let start = Instant::now();
        self.backend
            .add_membership(guest_id, event_id, role)
            .map_err(|e| fail("add_membership", &start, e))?;
        log_op_end!("add_membership", duration_ms = elapsed_ms(&start));
        Ok(())
    }

    /// Guests attending an event, in the order they were added
    pub fn list_guests_for_event(&self, event_id: EventId) -> BackendResult<Vec<Guest>> {
        log_op_start!("list_guests_for_event", event_id = event_id.get());
        let start = Instant::now();
        let guests = self
            .backend
            .list_guests_for_event(event_id)
            .map_err(|e| fail("list_guests_for_event", &start, e))?;
        log_op_end!(
            "list_guests_for_event",
            duration_ms = elapsed_ms(&start),
            result_len = guests.len() as u64
        );
        Ok(guests)
    }

    /// Change a guest's role on an event
    ///
    /// Silent no-op when the guest is not a member; the returned flag says
    /// whether anything changed.
    pub fn change_membership_role(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        new_role: &str,
    ) -> BackendResult<bool> {
        log_op_start!(
            "change_membership_role",
            guest_id = guest_id.get(),
            event_id = event_id.get(),
            role = new_role
        );
        let start = Instant::now();
        let changed = self
            .backend
            .change_membership_role(guest_id, event_id, new_role)
            .map_err(|e| fail("change_membership_role", &start, e))?;
        log_op_end!(
            "change_membership_role",
            duration_ms = elapsed_ms(&start),
            changed = changed
        );
        Ok(changed)
    }

    /// Events a guest belongs to, in the order the memberships were added
    pub fn list_events_for_guest(&self, guest_id: GuestId) -> BackendResult<Vec<Event>> {
        log_op_start!("list_events_for_guest", guest_id = guest_id.get());
        let start = Instant::now();
        let events = self
            .backend
            .list_events_for_guest(guest_id)
            .map_err(|e| fail("list_events_for_guest", &start, e))?;
        log_op_end!(
            "list_events_for_guest",
            duration_ms = elapsed_ms(&start),
            result_len = events.len() as u64
        );
        Ok(events)
    }

    /// Remove a guest from an event. Silent no-op when not a member.
    pub fn remove_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<bool> {
        log_op_start!(
            "remove_membership",
            guest_id = guest_id.get(),
            event_id = event_id.get()
        );
        let start = Instant::now();
        let removed = self
            .backend
            .remove_membership(guest_id, event_id)
            .map_err(|e| fail("remove_membership", &start, e))?;
        log_op_end!(
            "remove_membership",
            duration_ms = elapsed_ms(&start),
            changed = removed
        );
        Ok(removed)
    }

    /// Events reached through memberships holding exactly this role
    pub fn list_events_for_role(&self, role: &str) -> BackendResult<Vec<Event>> {
        log_op_start!("list_events_for_role", role = role);
        let start = Instant::now();
        let events = self
            .backend
            .list_events_for_role(role)
            .map_err(|e| fail("list_events_for_role", &start, e))?;
        log_op_end!(
            "list_events_for_role",
            duration_ms = elapsed_ms(&start),
            result_len = events.len() as u64
        );
        Ok(events)
    }

    /// Guests ranked by membership count, ties by ascending guest id
    pub fn top_guests(&self, n: usize) -> BackendResult<Vec<GuestRanking>> {
        log_op_start!("top_guests", limit = n as u64);
        let start = Instant::now();
        let rankings = self
            .backend
            .top_guests(n)
            .map_err(|e| fail("top_guests", &start, e))?;
        log_op_end!(
            "top_guests",
            duration_ms = elapsed_ms(&start),
            result_len = rankings.len() as u64
        );
        Ok(rankings)
    }
}
