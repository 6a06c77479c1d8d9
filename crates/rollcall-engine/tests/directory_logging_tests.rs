//! Operation-boundary logging tests
//!
//! The capture subscriber is global to this test binary, so everything runs
//! in one test to keep per-operation counts exact.

use rollcall_core::logging_facility::test_capture::{init_test_capture, TestCapture};
use rollcall_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CHANGED, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_EVENT_ID, FIELD_GUEST_ID, FIELD_RESULT_LEN, FIELD_ROLE,
};
use rollcall_core::GuestId;
use rollcall_engine::EventGuestDirectory;

fn count(capture: &TestCapture, op: &str, event: &str) -> usize {
    capture.count_events(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event))
}

#[test]
fn test_every_operation_logs_one_start_and_one_end() {
    let capture = init_test_capture();
    capture.clear();

    let mut dir = EventGuestDirectory::in_memory();
    let guest = dir.create_guest("Jeff").unwrap();
    let event = dir.create_event("Team meeting").unwrap();
    dir.add_membership(guest.id, event.id, "Speaker").unwrap();
    dir.list_guests_for_event(event.id).unwrap();
    dir.list_events_for_guest(guest.id).unwrap();
    dir.change_membership_role(guest.id, event.id, "Moderator")
        .unwrap();
    dir.list_events_for_role("Moderator").unwrap();
    dir.top_guests(3).unwrap();
    dir.remove_membership(guest.id, event.id).unwrap();

    for op in [
        "create_guest",
        "create_event",
        "add_membership",
        "list_guests_for_event",
        "list_events_for_guest",
        "change_membership_role",
        "list_events_for_role",
        "top_guests",
        "remove_membership",
    ] {
        assert_eq!(count(&capture, op, EVENT_START), 1, "start for {}", op);
        assert_eq!(count(&capture, op, EVENT_END), 1, "end for {}", op);
        assert_eq!(count(&capture, op, EVENT_END_ERROR), 0, "error for {}", op);
    }

    let ends: Vec<_> = capture
        .events_for_op("list_guests_for_event")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(ends[0].fields.get(FIELD_RESULT_LEN), Some(&"1".to_string()));
    assert!(ends[0].fields.contains_key(FIELD_DURATION_MS));

    let starts: Vec<_> = capture
        .events_for_op("add_membership")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();
    assert_eq!(starts[0].fields.get(FIELD_GUEST_ID), Some(&guest.id.to_string()));
    assert_eq!(starts[0].fields.get(FIELD_EVENT_ID), Some(&event.id.to_string()));
    assert_eq!(starts[0].fields.get(FIELD_ROLE), Some(&"Speaker".to_string()));

    let changed: Vec<_> = capture
        .events_for_op("change_membership_role")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(changed[0].fields.get(FIELD_CHANGED), Some(&"true".to_string()));

    // A failing call ends with end_error instead of end
    capture.clear();
    dir.add_membership(GuestId(99), event.id, "Speaker")
        .unwrap_err();

    assert_eq!(count(&capture, "add_membership", EVENT_START), 1);
    assert_eq!(count(&capture, "add_membership", EVENT_END), 0);
    assert_eq!(count(&capture, "add_membership", EVENT_END_ERROR), 1);

    let errors = capture.events_for_op("add_membership");
    let error = errors
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .unwrap();
    assert_eq!(
        error.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_NOT_FOUND".to_string())
    );
}
