// Host-side tests for the exclusive active marker used by navigation links
// and draft category buttons.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod selection {
    include!("../src/core/selection.rs");
}

use selection::*;

fn active_flags(s: &ExclusiveSelection) -> Vec<bool> {
    (0..s.len()).map(|i| s.is_active(i)).collect()
}

#[test]
fn first_link_is_active_initially() {
    let s = ExclusiveSelection::new(5, Some(0));
    assert_eq!(s.active(), Some(0));
    assert_eq!(active_flags(&s), vec![true, false, false, false, false]);
}

#[test]
fn clicking_any_link_leaves_exactly_that_one_active() {
    let mut s = ExclusiveSelection::new(6, Some(0));
    for i in [3, 0, 5, 5, 1, 4, 2] {
        assert!(s.select(i));
        let flags = active_flags(&s);
        assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        assert!(flags[i]);
    }
}

#[test]
fn out_of_range_selection_is_rejected() {
    let mut s = ExclusiveSelection::new(3, Some(1));
    assert!(!s.select(3));
    assert_eq!(s.active(), Some(1));
}

#[test]
fn initial_out_of_range_means_nothing_active() {
    let s = ExclusiveSelection::new(2, Some(7));
    assert_eq!(s.active(), None);
    assert!(active_flags(&s).iter().all(|f| !f));

    let empty = ExclusiveSelection::new(0, Some(0));
    assert!(empty.is_empty());
    assert_eq!(empty.active(), None);
}

#[test]
fn fragment_id_resolves_in_page_anchors_only() {
    assert_eq!(fragment_id("#services"), Some("services"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("/news.html"), None);
    assert_eq!(fragment_id("https://example.com/#contact"), None);
}

#[test]
fn only_in_page_anchors_suppress_navigation() {
    // nav clicks cancel the browser default only when a target id resolves
    for href in ["/about.html", "/about.html#team", "mailto:info@example.com", "#"] {
        assert!(fragment_id(href).is_none(), "{href}");
    }
    assert!(fragment_id("#access").is_some());
}
