// Integration tests for the demo driver against a SQLite file.

use rollcall_engine::commands::demo::{run_demo_fresh, DEMO_TOP_N};
use rollcall_engine::EventGuestDirectory;
use tempfile::TempDir;

#[test]
fn test_demo_on_sqlite_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("rollcall.db");
    let mut dir = EventGuestDirectory::open_sqlite(&db_path).unwrap();

    let report = run_demo_fresh(&mut dir).unwrap();

    let on_meeting: Vec<_> = report
        .guests_on_event
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(on_meeting, vec!["Jeff", "Jane"]);
    assert_eq!(report.events_for_guest.len(), 2);
    assert!(report.role_changed);
    assert!(report.speaker_events.is_empty());
    assert!(report.top_guests.len() <= DEMO_TOP_N);
    assert_eq!(report.top_guests[0].guest.id, report.seed.jeff.id);
    assert_eq!(report.top_guests[0].event_count, 2);
}

#[test]
fn test_demo_rerun_starts_from_empty_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("rollcall.db");
    let mut dir = EventGuestDirectory::open_sqlite(&db_path).unwrap();

    let first = run_demo_fresh(&mut dir).unwrap();
    let second = run_demo_fresh(&mut dir).unwrap();

    assert_eq!(first.seed.jeff.id, second.seed.jeff.id);
    assert_eq!(first.seed.summit.id, second.seed.summit.id);
    assert_eq!(dir.list_guests().unwrap().len(), 2);
    assert_eq!(dir.list_memberships().unwrap().len(), 3);
}

#[test]
fn test_demo_report_serializes_ids_as_integers() {
    let mut dir = EventGuestDirectory::in_memory();
    let report = rollcall_engine::run_demo(&mut dir).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"]["jeff"]["id"], 1);
    assert_eq!(json["role_changed"], true);
    assert_eq!(json["top_guests"][0]["event_count"], 2);
    assert_eq!(json["top_guests"][0]["events"][1]["name"], "Business Summit");
}
