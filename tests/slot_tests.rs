// Host-side tests for the single-occupancy timer slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod slot {
    include!("../src/core/slot.rs");
}

use slot::*;
use std::cell::Cell;
use std::rc::Rc;

/// Stands in for a pending timeout: dropping it counts as a cancellation.
struct Pending(Rc<Cell<u32>>);

impl Drop for Pending {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn replacing_cancels_the_previous_handle() {
    let cancelled = Rc::new(Cell::new(0));
    let slot = Slot::new();
    slot.replace(Pending(cancelled.clone()));
    assert_eq!(cancelled.get(), 0);
    slot.replace(Pending(cancelled.clone()));
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn weak_handle_does_not_outlive_the_owner() {
    let cancelled = Rc::new(Cell::new(0));
    let owner = Slot::new();
    let weak = owner.downgrade();
    assert!(weak.upgrade().is_some());
    owner.replace(Pending(cancelled.clone()));
    drop(owner);
    assert_eq!(cancelled.get(), 1);
    assert!(weak.upgrade().is_none());
}

#[test]
fn late_completion_after_teardown_schedules_nothing() {
    let cancelled = Rc::new(Cell::new(0));
    let owner: Slot<Pending> = Slot::new();
    let in_flight = owner.downgrade();
    // the listener owning the slot is dropped while the clipboard is pending
    drop(owner);
    if let Some(slot) = in_flight.upgrade() {
        slot.replace(Pending(cancelled.clone()));
    }
    assert_eq!(cancelled.get(), 0);
}

#[test]
fn upgraded_handle_keeps_the_scheduled_task_while_owner_lives() {
    let cancelled = Rc::new(Cell::new(0));
    let owner = Slot::new();
    let in_flight = owner.downgrade();
    if let Some(slot) = in_flight.upgrade() {
        slot.replace(Pending(cancelled.clone()));
    }
    // the temporary strong handle is gone but the owner still holds the task
    assert_eq!(cancelled.get(), 0);
    drop(owner);
    assert_eq!(cancelled.get(), 1);
}
