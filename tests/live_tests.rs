// Host-side tests for transient element bookkeeping (ripples).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod live {
    include!("../src/core/live.rs");
}

use live::*;

#[test]
fn released_items_are_not_drained() {
    let mut set = LiveSet::new();
    let a = set.insert("a");
    let b = set.insert("b");
    assert_eq!(set.release(a), Some("a"));
    assert_eq!(set.len(), 1);
    assert_eq!(set.drain(), vec!["b"]);
    assert_eq!(set.release(b), None);
}

#[test]
fn second_release_is_a_no_op() {
    // animationend and the fallback timer may both fire
    let mut set = LiveSet::new();
    let id = set.insert(1);
    assert_eq!(set.release(id), Some(1));
    assert_eq!(set.release(id), None);
    assert!(set.is_empty());
}

#[test]
fn pending_ripples_are_handed_back_on_teardown() {
    let mut set = LiveSet::new();
    let ids: Vec<u32> = (0..4).map(|i| set.insert(format!("ripple-{i}"))).collect();
    set.release(ids[1]);
    assert_eq!(set.drain(), vec!["ripple-0", "ripple-2", "ripple-3"]);
    assert!(set.is_empty());
    assert!(set.drain().is_empty());
}

#[test]
fn ids_stay_unique_after_drain() {
    let mut set = LiveSet::new();
    let first = set.insert('x');
    set.drain();
    let second = set.insert('y');
    assert_ne!(first, second);
    assert_eq!(set.release(first), None);
    assert_eq!(set.release(second), Some('y'));
}
