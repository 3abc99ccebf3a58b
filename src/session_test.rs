use super::*;
use crate::router::guard::{Decision, decide};
use crate::router::table::resolve;

// =============================================================
// In-memory store semantics
// =============================================================

#[test]
fn memory_session_round_trips_values() {
    let session = Session::in_memory();
    assert_eq!(session.get("k"), None);
    session.set("k", "v");
    assert_eq!(session.get("k"), Some("v".to_owned()));
    session.clear("k");
    assert_eq!(session.get("k"), None);
}

#[test]
fn logged_in_is_presence_not_value() {
    let session = Session::in_memory();
    assert!(!session.logged_in());
    session.set(LOGGED_IN_KEY, "false");
    assert!(session.logged_in());
    session.clear(LOGGED_IN_KEY);
    assert!(!session.logged_in());
}

// =============================================================
// Browser store outside the browser
// =============================================================

#[test]
fn browser_session_misses_without_a_window() {
    let session = Session::browser();
    session.set(LOGGED_IN_KEY, "true");
    assert_eq!(session.get(LOGGED_IN_KEY), None);
    assert!(!session.logged_in());
}

// =============================================================
// Guard evaluated against a live session
// =============================================================

#[test]
fn guard_follows_session_flag_transitions() {
    let session = Session::in_memory();
    let matched = resolve("/chatDialogue");

    let decision = decide(matched.route.access, session.logged_in(), "/chatDialogue");
    assert_eq!(decision, Decision::ToLogin { next_url: "/chatDialogue".to_owned() });

    session.set(LOGGED_IN_KEY, "true");
    let decision = decide(matched.route.access, session.logged_in(), "/chatDialogue");
    assert_eq!(decision, Decision::Proceed);
}
