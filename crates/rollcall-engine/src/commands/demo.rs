//! Demo scenario driver
//!
//! Seeds two guests, two events and three memberships, then runs every query
//! once and collects the intermediate results into a `DemoReport`.

#![allow(clippy::result_large_err)]

use serde::Serialize;

use rollcall_core::backend::{BackendResult, DirectoryBackend};
use rollcall_core::model::{Event, Guest, GuestRanking};
use rollcall_store::SqliteDirectory;

use super::directory::EventGuestDirectory;

/// Number of entries requested from the ranking query
pub const DEMO_TOP_N: usize = 3;

/// The seeded demo entities
#[derive(Debug, Clone, Serialize)]
pub struct DemoSeed {
    pub jeff: Guest,
    pub jane: Guest,
    pub meeting: Event,
    pub summit: Event,
}

/// Every intermediate result of a demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub seed: DemoSeed,
    /// Guests on "Team meeting"
    pub guests_on_event: Vec<Guest>,
    /// Jeff's events
    pub events_for_guest: Vec<Event>,
    /// Whether Jeff's "Team meeting" role became "Moderator"
    pub role_changed: bool,
    /// Events reached through a "Speaker" membership after the role change
    pub speaker_events: Vec<Event>,
    pub top_guests: Vec<GuestRanking>,
}

/// Create Jeff, Jane, "Team meeting" and "Business Summit" with three
/// memberships: Jeff speaks at the meeting, Jane attends it, Jeff attends
/// the summit.
///
/// # Errors
///
/// Propagates any backend failure. Names are not unique, so seeding a
/// non-empty backend adds a second set of rows.
pub fn seed_demo<B: DirectoryBackend>(
    dir: &mut EventGuestDirectory<B>,
) -> BackendResult<DemoSeed> {
    let jeff = dir.create_guest("Jeff")?;
    let jane = dir.create_guest("Jane")?;
    let meeting = dir.create_event("Team meeting")?;
    let summit = dir.create_event("Business Summit")?;

    dir.add_membership(jeff.id, meeting.id, "Speaker")?;
    dir.add_membership(jane.id, meeting.id, "Attendee")?;
    dir.add_membership(jeff.id, summit.id, "Attendee")?;

    Ok(DemoSeed {
        jeff,
        jane,
        meeting,
        summit,
    })
}

/// Seed the demo data and run each query against it
///
/// # Errors
///
/// Propagates any backend failure.
pub fn run_demo<B: DirectoryBackend>(
    dir: &mut EventGuestDirectory<B>,
) -> BackendResult<DemoReport> {
    let seed = seed_demo(dir)?;

    let guests_on_event = dir.list_guests_for_event(seed.meeting.id)?;
    let events_for_guest = dir.list_events_for_guest(seed.jeff.id)?;
    let role_changed = dir.change_membership_role(seed.jeff.id, seed.meeting.id, "Moderator")?;
    let speaker_events = dir.list_events_for_role("Speaker")?;
    let top_guests = dir.top_guests(DEMO_TOP_N)?;

    Ok(DemoReport {
        seed,
        guests_on_event,
        events_for_guest,
        role_changed,
        speaker_events,
        top_guests,
    })
}

/// Wipe the database, then run the demo on the empty schema
///
/// # Errors
///
/// Propagates reset and backend failures.
pub fn run_demo_fresh(
    dir: &mut EventGuestDirectory<SqliteDirectory>,
) -> BackendResult<DemoReport> {
    dir.reset()?;
    run_demo(dir)
}
