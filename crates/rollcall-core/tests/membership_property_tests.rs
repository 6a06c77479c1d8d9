// Property tests: arbitrary operation sequences against the in-memory store,
// checked against a plain reference model of (guest, event) -> role.

use proptest::prelude::*;
use rollcall_core::{DirectoryBackend, EventId, ExErrorKind, GuestId, Store};

const GUESTS: i64 = 4;
const EVENTS: i64 = 3;
const ROLES: [&str; 4] = ["Speaker", "Attendee", "Moderator", ""];

#[derive(Debug, Clone)]
enum Op {
    Add(i64, i64, usize),
    ChangeRole(i64, i64, usize),
    Remove(i64, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (1..=GUESTS, 1..=EVENTS, 0..ROLES.len()).prop_map(|(g, e, r)| Op::Add(g, e, r)),
        1 => (1..=GUESTS, 1..=EVENTS, 0..ROLES.len())
            .prop_map(|(g, e, r)| Op::ChangeRole(g, e, r)),
        1 => (1..=GUESTS, 1..=EVENTS).prop_map(|(g, e)| Op::Remove(g, e)),
    ]
}

fn fresh_store() -> Store {
    let mut store = Store::new();
    for g in 1..=GUESTS {
        store.create_guest(&format!("guest-{g}")).unwrap();
    }
    for e in 1..=EVENTS {
        store.create_event(&format!("event-{e}")).unwrap();
    }
    store
}

/// Apply ops to both the store and the reference model (insertion-ordered)
fn run(ops: &[Op]) -> (Store, Vec<(i64, i64, String)>) {
    let mut store = fresh_store();
    let mut model: Vec<(i64, i64, String)> = Vec::new();

    for op in ops {
        match op {
            Op::Add(g, e, r) => {
                let result = store.add_membership(GuestId(*g), EventId(*e), ROLES[*r]);
                if model.iter().any(|(mg, me, _)| mg == g && me == e) {
                    let err = result.expect_err("duplicate add must fail");
                    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
                } else {
                    result.expect("add of a new pair must succeed");
                    model.push((*g, *e, ROLES[*r].to_string()));
                }
            }
            Op::ChangeRole(g, e, r) => {
                let changed = store
                    .change_membership_role(GuestId(*g), EventId(*e), ROLES[*r])
                    .unwrap();
                let entry = model.iter_mut().find(|(mg, me, _)| mg == g && me == e);
                assert_eq!(changed, entry.is_some());
                if let Some(entry) = entry {
                    entry.2 = ROLES[*r].to_string();
                }
            }
            Op::Remove(g, e) => {
                let removed = store.remove_membership(GuestId(*g), EventId(*e)).unwrap();
                let before = model.len();
                model.retain(|(mg, me, _)| !(mg == g && me == e));
                assert_eq!(removed, before != model.len());
            }
        }
    }

    (store, model)
}

proptest! {
    #[test]
    fn prop_guests_for_event_match_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let (store, model) = run(&ops);

        for e in 1..=EVENTS {
            let got: Vec<i64> = store
                .list_guests_for_event(EventId(e))
                .unwrap()
                .iter()
                .map(|g| g.id.get())
                .collect();
            let expected: Vec<i64> = model
                .iter()
                .filter(|(_, me, _)| *me == e)
                .map(|(mg, _, _)| *mg)
                .collect();
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn prop_events_for_role_one_entry_per_membership(
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let (store, model) = run(&ops);

        for role in ROLES {
            let got: Vec<i64> = store
                .list_events_for_role(role)
                .unwrap()
                .iter()
                .map(|e| e.id.get())
                .collect();
            let expected: Vec<i64> = model
                .iter()
                .filter(|(_, _, r)| r == role)
                .map(|(_, me, _)| *me)
                .collect();
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn prop_top_guests_sorted_and_counts_consistent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        n in 0usize..6,
    ) {
        let (store, _) = run(&ops);

        let top = store.top_guests(n).unwrap();
        prop_assert!(top.len() <= n);

        for pair in top.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.event_count > b.event_count
                    || (a.event_count == b.event_count && a.guest.id < b.guest.id)
            );
        }

        for ranking in &top {
            prop_assert_eq!(ranking.event_count, ranking.events.len());
            let events = store.list_events_for_guest(ranking.guest.id).unwrap();
            prop_assert_eq!(&ranking.events, &events);
        }
    }

    #[test]
    fn prop_added_guest_listed_exactly_once(
        ops in prop::collection::vec(op_strategy(), 0..30),
        g in 1..=GUESTS,
        e in 1..=EVENTS,
    ) {
        let (mut store, _) = run(&ops);
        // Ensure the pair is absent, then add it
        store.remove_membership(GuestId(g), EventId(e)).unwrap();
        store.add_membership(GuestId(g), EventId(e), "Speaker").unwrap();

        let hits = store
            .list_guests_for_event(EventId(e))
            .unwrap()
            .iter()
            .filter(|guest| guest.id == GuestId(g))
            .count();
        prop_assert_eq!(hits, 1);
    }
}
