use crate::core::Slot;
use fnv::FnvHashMap;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Owns every fire-and-forget timeout of the site so teardown can cancel
/// whatever is still pending. Fired entries are dropped lazily on the next
/// schedule; a timeout is never dropped from inside its own callback.
#[derive(Default)]
pub struct Scheduler {
    next_id: Cell<u32>,
    pending: RefCell<FnvHashMap<u32, Timeout>>,
    fired: Rc<RefCell<Vec<u32>>>,
}

impl Scheduler {
    pub fn after(&self, millis: u32, task: impl FnOnce() + 'static) {
        self.prune();
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let fired = self.fired.clone();
        let timeout = Timeout::new(millis, move || {
            task();
            fired.borrow_mut().push(id);
        });
        self.pending.borrow_mut().insert(id, timeout);
    }

    pub fn pending(&self) -> usize {
        self.prune();
        self.pending.borrow().len()
    }

    pub fn cancel_all(&self) {
        self.fired.borrow_mut().clear();
        // dropping a Timeout clears it
        self.pending.borrow_mut().clear();
    }

    fn prune(&self) {
        let done: Vec<u32> = self.fired.borrow_mut().drain(..).collect();
        if done.is_empty() {
            return;
        }
        let mut pending = self.pending.borrow_mut();
        for id in done {
            pending.remove(&id);
        }
    }
}

/// A single pending timeout where scheduling again replaces (and cancels)
/// the previous one, e.g. a message auto-hide restarted by a newer click.
pub type TimerSlot = Slot<Timeout>;

pub trait Schedule {
    fn schedule(&self, millis: u32, task: impl FnOnce() + 'static);
}

impl Schedule for TimerSlot {
    fn schedule(&self, millis: u32, task: impl FnOnce() + 'static) {
        self.replace(Timeout::new(millis, task));
    }
}
