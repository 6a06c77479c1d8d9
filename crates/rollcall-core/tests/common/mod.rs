use rollcall_core::{DirectoryBackend, Event, Guest, Store};

/// The Jeff/Jane demo data, before any role change
#[allow(dead_code)]
pub struct Scenario {
    pub jeff: Guest,
    pub jane: Guest,
    pub meeting: Event,
    pub summit: Event,
}

/// Seed the demo guests, events and three memberships into any backend
#[allow(dead_code)]
pub fn seed_scenario<B: DirectoryBackend>(backend: &mut B) -> Scenario {
    let jeff = backend.create_guest("Jeff").unwrap();
    let jane = backend.create_guest("Jane").unwrap();
    let meeting = backend.create_event("Team meeting").unwrap();
    let summit = backend.create_event("Business Summit").unwrap();

    backend
        .add_membership(jeff.id, meeting.id, "Speaker")
        .unwrap();
    backend
        .add_membership(jane.id, meeting.id, "Attendee")
        .unwrap();
    backend
        .add_membership(jeff.id, summit.id, "Attendee")
        .unwrap();

    Scenario {
        jeff,
        jane,
        meeting,
        summit,
    }
}

/// A fresh in-memory store seeded with the scenario
#[allow(dead_code)]
pub fn scenario_store() -> (Store, Scenario) {
    let mut store = Store::new();
    let scenario = seed_scenario(&mut store);
    (store, scenario)
}

#[allow(dead_code)]
pub fn names<T, F>(items: &[T], name: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    items.iter().map(|i| name(i).to_string()).collect()
}
