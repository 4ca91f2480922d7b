// Host-side tests for the one-shot reveal state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn elements_start_hidden() {
    let mut t = RevealTracker::new();
    let a = t.track();
    let b = t.track();
    assert_eq!((a, b), (0, 1));
    assert_eq!(t.state(a), Some(RevealState::Hidden));
    assert_eq!(t.revealed_count(), 0);
    assert_eq!(t.len(), 2);
}

#[test]
fn first_intersection_reveals() {
    let mut t = RevealTracker::new();
    let id = t.track();
    assert_eq!(t.on_intersection(id, false), RevealAction::Ignore);
    assert_eq!(t.state(id), Some(RevealState::Hidden));
    assert_eq!(t.on_intersection(id, true), RevealAction::Reveal);
    assert_eq!(t.state(id), Some(RevealState::Revealed));
}

#[test]
fn revealed_is_terminal_and_idempotent() {
    let mut t = RevealTracker::new();
    let id = t.track();
    t.on_intersection(id, true);
    // scrolling out and back in again changes nothing
    for intersecting in [false, true, false, true] {
        assert_eq!(t.on_intersection(id, intersecting), RevealAction::Unobserve);
        assert_eq!(t.state(id), Some(RevealState::Revealed));
    }
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn elements_reveal_independently() {
    let mut t = RevealTracker::new();
    let ids: Vec<usize> = (0..4).map(|_| t.track()).collect();
    t.on_intersection(ids[2], true);
    assert_eq!(t.state(ids[0]), Some(RevealState::Hidden));
    assert_eq!(t.state(ids[2]), Some(RevealState::Revealed));
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut t = RevealTracker::new();
    assert!(t.is_empty());
    assert_eq!(t.on_intersection(3, true), RevealAction::Ignore);
    assert_eq!(t.state(3), None);
}
