//! Row-level SQLite access for guests, events and memberships
//!
//! Every function takes a `&Connection`; pass a `&Transaction` (which derefs
//! to `Connection`) to run inside a unit of work. Membership-derived lists are
//! ordered by the membership rowid, i.e. insertion order.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rollcall_core::model::{Event, EventId, Guest, GuestId, Membership};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// SQLite repository for the directory tables
pub struct SqliteRepo;

fn guest_from_row(row: &Row<'_>) -> rusqlite::Result<Guest> {
    Ok(Guest::new(GuestId(row.get(0)?), row.get::<_, String>(1)?))
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event::new(EventId(row.get(0)?), row.get::<_, String>(1)?))
}

fn membership_from_row(row: &Row<'_>) -> rusqlite::Result<Membership> {
    Ok(Membership::new(
        GuestId(row.get(0)?),
        EventId(row.get(1)?),
        row.get::<_, String>(2)?,
    ))
}

/// Run a query and collect every mapped row
fn collect_rows<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: rusqlite::Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

impl SqliteRepo {
    // ----- guests -----

    /// Insert a guest; the id comes from SQLite
    pub fn insert_guest(conn: &Connection, name: &str) -> Result<Guest> {
        conn.execute("INSERT INTO guests (name) VALUES (?1)", [name])
            .map_err(from_rusqlite)?;
        Ok(Guest::new(GuestId(conn.last_insert_rowid()), name))
    }

    pub fn get_guest(conn: &Connection, id: GuestId) -> Result<Option<Guest>> {
        conn.query_row(
            "SELECT id, name FROM guests WHERE id = ?1",
            [id.get()],
            guest_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_guests(conn: &Connection) -> Result<Vec<Guest>> {
        collect_rows(
            conn,
            "SELECT id, name FROM guests ORDER BY id",
            [],
            guest_from_row,
        )
    }

    /// Delete a guest; memberships go with it through ON DELETE CASCADE
    pub fn delete_guest(conn: &Connection, id: GuestId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM guests WHERE id = ?1", [id.get()])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    // ----- events -----

    pub fn insert_event(conn: &Connection, name: &str) -> Result<Event> {
        conn.execute("INSERT INTO events (name) VALUES (?1)", [name])
            .map_err(from_rusqlite)?;
        Ok(Event::new(EventId(conn.last_insert_rowid()), name))
    }

    pub fn get_event(conn: &Connection, id: EventId) -> Result<Option<Event>> {
        conn.query_row(
            "SELECT id, name FROM events WHERE id = ?1",
            [id.get()],
            event_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_events(conn: &Connection) -> Result<Vec<Event>> {
        collect_rows(
            conn,
            "SELECT id, name FROM events ORDER BY id",
            [],
            event_from_row,
        )
    }

    pub fn delete_event(conn: &Connection, id: EventId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM events WHERE id = ?1", [id.get()])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    // ----- memberships -----

    pub fn insert_membership(conn: &Connection, membership: &Membership) -> Result<()> {
        conn.execute(
            "INSERT INTO memberships (guest_id, event_id, role) VALUES (?1, ?2, ?3)",
            params![
                membership.guest_id.get(),
                membership.event_id.get(),
                membership.role
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    pub fn get_membership(
        conn: &Connection,
        guest_id: GuestId,
        event_id: EventId,
    ) -> Result<Option<Membership>> {
        conn.query_row(
            "SELECT guest_id, event_id, role FROM memberships
             WHERE guest_id = ?1 AND event_id = ?2",
            params![guest_id.get(), event_id.get()],
            membership_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_memberships(conn: &Connection) -> Result<Vec<Membership>> {
        collect_rows(
            conn,
            "SELECT guest_id, event_id, role FROM memberships ORDER BY rowid",
            [],
            membership_from_row,
        )
    }

    /// Returns `true` if a row was updated
    pub fn update_membership_role(
        conn: &Connection,
        guest_id: GuestId,
        event_id: EventId,
        role: &str,
    ) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE memberships SET role = ?3 WHERE guest_id = ?1 AND event_id = ?2",
                params![guest_id.get(), event_id.get(), role],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Returns `true` if a row was deleted
    pub fn delete_membership(conn: &Connection, guest_id: GuestId, event_id: EventId) -> Result<bool> {
        let changed = conn
            .execute(
                "DELETE FROM memberships WHERE guest_id = ?1 AND event_id = ?2",
                params![guest_id.get(), event_id.get()],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    // ----- joins -----

    pub fn guests_for_event(conn: &Connection, event_id: EventId) -> Result<Vec<Guest>> {
        collect_rows(
            conn,
            "SELECT g.id, g.name FROM memberships m
             JOIN guests g ON g.id = m.guest_id
             WHERE m.event_id = ?1
             ORDER BY m.rowid",
            [event_id.get()],
            guest_from_row,
        )
    }

    pub fn events_for_guest(conn: &Connection, guest_id: GuestId) -> Result<Vec<Event>> {
        collect_rows(
            conn,
            "SELECT e.id, e.name FROM memberships m
             JOIN events e ON e.id = m.event_id
             WHERE m.guest_id = ?1
             ORDER BY m.rowid",
            [guest_id.get()],
            event_from_row,
        )
    }

    /// One row per matching membership; the same event can repeat
    pub fn events_for_role(conn: &Connection, role: &str) -> Result<Vec<Event>> {
        collect_rows(
            conn,
            "SELECT e.id, e.name FROM memberships m
             JOIN events e ON e.id = m.event_id
             WHERE m.role = ?1
             ORDER BY m.rowid",
            [role],
            event_from_row,
        )
    }

    /// Membership count per guest, count descending then guest id ascending
    pub fn guest_membership_counts(conn: &Connection, limit: usize) -> Result<Vec<(GuestId, usize)>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        collect_rows(
            conn,
            "SELECT guest_id, COUNT(*) AS membership_count FROM memberships
             GROUP BY guest_id
             ORDER BY membership_count DESC, guest_id ASC
             LIMIT ?1",
            [limit],
            |row| {
                let count: i64 = row.get(1)?;
                Ok((GuestId(row.get(0)?), count as usize))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_guest_roundtrip() {
        let conn = setup_test_db();
        let guest = SqliteRepo::insert_guest(&conn, "Jeff").unwrap();
        assert_eq!(guest.id, GuestId(1));
        assert_eq!(SqliteRepo::get_guest(&conn, guest.id).unwrap(), Some(guest));
        assert_eq!(SqliteRepo::get_guest(&conn, GuestId(2)).unwrap(), None);
    }

    #[test]
    fn test_role_update_keeps_insertion_order() {
        let conn = setup_test_db();
        let jeff = SqliteRepo::insert_guest(&conn, "Jeff").unwrap();
        let jane = SqliteRepo::insert_guest(&conn, "Jane").unwrap();
        let meeting = SqliteRepo::insert_event(&conn, "Team meeting").unwrap();
        SqliteRepo::insert_membership(&conn, &Membership::new(jeff.id, meeting.id, "Speaker"))
            .unwrap();
        SqliteRepo::insert_membership(&conn, &Membership::new(jane.id, meeting.id, "Attendee"))
            .unwrap();

        assert!(SqliteRepo::update_membership_role(&conn, jeff.id, meeting.id, "Moderator").unwrap());

        let guests = SqliteRepo::guests_for_event(&conn, meeting.id).unwrap();
        assert_eq!(guests, vec![jeff, jane]);
    }

    #[test]
    fn test_membership_counts_limit() {
        let conn = setup_test_db();
        let a = SqliteRepo::insert_guest(&conn, "A").unwrap();
        let b = SqliteRepo::insert_guest(&conn, "B").unwrap();
        let e1 = SqliteRepo::insert_event(&conn, "E1").unwrap();
        let e2 = SqliteRepo::insert_event(&conn, "E2").unwrap();
        for (g, e) in [(b.id, e1.id), (b.id, e2.id), (a.id, e1.id)] {
            SqliteRepo::insert_membership(&conn, &Membership::new(g, e, "x")).unwrap();
        }

        assert_eq!(
            SqliteRepo::guest_membership_counts(&conn, 10).unwrap(),
            vec![(b.id, 2), (a.id, 1)]
        );
        assert_eq!(SqliteRepo::guest_membership_counts(&conn, 1).unwrap().len(), 1);
        assert!(SqliteRepo::guest_membership_counts(&conn, 0).unwrap().is_empty());
    }
}
