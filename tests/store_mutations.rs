//! Tests for committing mutations through the store handle.

mod common;

use callerboard::callers::RecentCaller;
use callerboard::config::{BuildInfo, Mode};
use callerboard::store::{Mutation, State, Store};
use common::new_store;

fn caller(id: &str) -> RecentCaller {
    RecentCaller {
        caller_id: id.to_string(),
        date: "Mon May 01 2023".to_string(),
        results: "A, B".to_string(),
        ..RecentCaller::default()
    }
}

#[test]
fn test_initial_state_from_build() {
    let dev = State::from_build(&BuildInfo {
        mode: Mode::Development,
        version: "1.2.3".into(),
    });
    assert!(dev.debug);
    assert_eq!(dev.version, "1.2.3-dev");
    assert!(!dev.is_initialized);
    assert!(dev.recent_callers.is_empty());

    let prod = State::from_build(&BuildInfo {
        mode: Mode::Production,
        version: "1.2.3".into(),
    });
    assert!(!prod.debug);
    assert_eq!(prod.version, "1.2.3");
}

#[test]
fn test_set_callers_replaces_list() {
    let store = new_store();
    store.commit(Mutation::set_callers(vec![caller("a"), caller("b")]));
    store.commit(Mutation::set_callers(vec![caller("c")]));

    let ids: Vec<String> = store.read(|s| {
        s.recent_callers
            .iter()
            .map(|c| c.caller_id.clone())
            .collect()
    });
    assert_eq!(ids, ["c"]);
}

#[test]
fn test_set_callers_is_idempotent() {
    let store = new_store();
    let payload = vec![caller("a"), caller("b")];

    store.commit(Mutation::set_callers(payload.clone()));
    let once = store.snapshot();
    store.commit(Mutation::set_callers(payload));

    assert_eq!(store.snapshot(), once);
}

#[test]
fn test_set_callers_none_means_empty() {
    let store = new_store();
    store.commit(Mutation::set_callers(vec![caller("a")]));
    store.commit(Mutation::set_callers(None));
    assert!(store.read(|s| s.recent_callers.is_empty()));
}

#[test]
fn test_set_callers_touches_only_the_list() {
    let store = new_store();
    store.commit(Mutation::SetError("boom".into()));
    let before = store.snapshot();

    store.commit(Mutation::set_callers(vec![caller("a")]));

    let after = store.snapshot();
    assert_eq!(after.debug, before.debug);
    assert_eq!(after.version, before.version);
    assert_eq!(after.is_initialized, before.is_initialized);
    assert_eq!(after.last_error, before.last_error);
}

#[test]
fn test_clones_share_state() {
    let store = new_store();
    let view = store.clone();

    store.commit(Mutation::set_callers(vec![caller("a")]));

    assert_eq!(view.read(|s| s.recent_callers.len()), 1);
    assert_eq!(view.revision(), 1);
}

#[test]
fn test_snapshot_is_detached() {
    let store = Store::new(State::default());
    let snapshot = store.snapshot();
    store.commit(Mutation::set_callers(vec![caller("a")]));
    assert!(snapshot.recent_callers.is_empty());
}

#[test]
fn test_mutation_names() {
    assert_eq!(Mutation::set_callers(None).name(), "SET_CALLERS");
    assert_eq!(Mutation::SetError("x".into()).name(), "SET_ERROR");
    assert_eq!(Mutation::ClearError.name(), "CLEAR_ERROR");
}
