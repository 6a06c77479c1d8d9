//! SQLite-backed `DirectoryBackend`
//!
//! Each trait call is one transaction. Mutations open an IMMEDIATE
//! transaction so the existence check and the write cannot interleave with
//! another writer; reads use a deferred transaction so multi-statement reads
//! (top guests) see a single snapshot. A transaction that is dropped without
//! `commit` rolls back, which covers every early `?` return.

#![allow(clippy::result_large_err)]

use std::path::Path;

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::{apply_migrations, reset_schema};
use crate::repo::SqliteRepo;
use rollcall_core::backend::{BackendResult, DirectoryBackend};
use rollcall_core::errors::DirectoryError;
use rollcall_core::model::{Event, EventId, Guest, GuestId, GuestRanking, Membership};
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Directory persisted in a SQLite database
pub struct SqliteDirectory {
    conn: Connection,
}

impl SqliteDirectory {
    /// Open (creating if needed) a database file and migrate it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
        }
        let conn = crate::db::open(path)?;
        tracing::debug!(path = %path.display(), "database opened");
        Self::from_connection(conn)
    }

    /// Fresh in-memory database, migrated
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(crate::db::open_in_memory()?)
    }

    /// Configure and migrate an existing connection
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        crate::db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Underlying connection, for inspection in tests and tooling
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Drop all rows and restart id sequences
    pub fn reset(&mut self) -> Result<()> {
        reset_schema(&mut self.conn)
    }

    fn write_tx(&mut self) -> Result<Transaction<'_>> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)
    }

    fn read_tx(&self) -> Result<Transaction<'_>> {
        self.conn.unchecked_transaction().map_err(from_rusqlite)
    }
}

impl DirectoryBackend for SqliteDirectory {
    fn create_guest(&mut self, name: &str) -> BackendResult<Guest> {
        let tx = self.write_tx()?;
        let guest = SqliteRepo::insert_guest(&tx, name)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(guest)
    }

    fn get_guest(&self, id: GuestId) -> BackendResult<Option<Guest>> {
        SqliteRepo::get_guest(&self.conn, id)
    }

    fn list_guests(&self) -> BackendResult<Vec<Guest>> {
        SqliteRepo::list_guests(&self.conn)
    }

    fn delete_guest(&mut self, id: GuestId) -> BackendResult<bool> {
        let tx = self.write_tx()?;
        let deleted = SqliteRepo::delete_guest(&tx, id)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(deleted)
    }

    fn create_event(&mut self, name: &str) -> BackendResult<Event> {
        let tx = self.write_tx()?;
        let event = SqliteRepo::insert_event(&tx, name)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(event)
    }

    fn get_event(&self, id: EventId) -> BackendResult<Option<Event>> {
        SqliteRepo::get_event(&self.conn, id)
    }

    fn list_events(&self) -> BackendResult<Vec<Event>> {
        SqliteRepo::list_events(&self.conn)
    }

    fn delete_event(&mut self, id: EventId) -> BackendResult<bool> {
        let tx = self.write_tx()?;
        let deleted = SqliteRepo::delete_event(&tx, id)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(deleted)
    }

    fn get_membership(
        &self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<Option<Membership>> {
        SqliteRepo::get_membership(&self.conn, guest_id, event_id)
    }

    fn list_memberships(&self) -> BackendResult<Vec<Membership>> {
        SqliteRepo::list_memberships(&self.conn)
    }

    fn add_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        role: &str,
    ) -> BackendResult<()> {
        let tx = self.write_tx()?;

        if SqliteRepo::get_guest(&tx, guest_id)?.is_none() {
            return Err(DirectoryError::GuestNotFound { guest_id }.into());
        }
        if SqliteRepo::get_event(&tx, event_id)?.is_none() {
            return Err(DirectoryError::EventNotFound { event_id }.into());
        }
        if SqliteRepo::get_membership(&tx, guest_id, event_id)?.is_some() {
            return Err(DirectoryError::DuplicateMembership { guest_id, event_id }.into());
        }

        // The primary key still guards the pair if the checks above are bypassed
        SqliteRepo::insert_membership(&tx, &Membership::new(guest_id, event_id, role))?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(())
    }

    fn change_membership_role(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
        new_role: &str,
    ) -> BackendResult<bool> {
        let tx = self.write_tx()?;
        let changed = SqliteRepo::update_membership_role(&tx, guest_id, event_id, new_role)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(changed)
    }

    fn remove_membership(
        &mut self,
        guest_id: GuestId,
        event_id: EventId,
    ) -> BackendResult<bool> {
        let tx = self.write_tx()?;
        let removed = SqliteRepo::delete_membership(&tx, guest_id, event_id)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(removed)
    }

    fn list_guests_for_event(&self, event_id: EventId) -> BackendResult<Vec<Guest>> {
        SqliteRepo::guests_for_event(&self.conn, event_id)
    }

    fn list_events_for_guest(&self, guest_id: GuestId) -> BackendResult<Vec<Event>> {
        SqliteRepo::events_for_guest(&self.conn, guest_id)
    }

    fn list_events_for_role(&self, role: &str) -> BackendResult<Vec<Event>> {
        SqliteRepo::events_for_role(&self.conn, role)
    }

    fn top_guests(&self, n: usize) -> BackendResult<Vec<GuestRanking>> {
        let tx = self.read_tx()?;

        let mut rankings = Vec::new();
        for (guest_id, event_count) in SqliteRepo::guest_membership_counts(&tx, n)? {
            let guest = SqliteRepo::get_guest(&tx, guest_id)?
                .ok_or(DirectoryError::GuestNotFound { guest_id })?;
            let events = SqliteRepo::events_for_guest(&tx, guest_id)?;
            rankings.push(GuestRanking {
                guest,
                event_count,
                events,
            });
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(rankings)
    }
}
