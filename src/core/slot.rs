use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A shared single-occupancy cell for a cancel-on-drop handle (a pending
/// timeout). Putting a new handle in drops the previous one, and the last
/// strong owner going away drops whatever is still held.
pub struct Slot<H>(Rc<RefCell<Option<H>>>);

impl<H> Clone for Slot<H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<H> Default for Slot<H> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<H> Slot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, dropping the one it replaces outside the borrow.
    pub fn replace(&self, handle: H) {
        let previous = self.0.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn downgrade(&self) -> WeakSlot<H> {
        WeakSlot(Rc::downgrade(&self.0))
    }
}

/// Non-owning view of a [`Slot`]; async work that may outlive its owner
/// holds this so it never ends up as the last owner.
pub struct WeakSlot<H>(Weak<RefCell<Option<H>>>);

impl<H> WeakSlot<H> {
    /// `None` once every strong owner has been dropped.
    pub fn upgrade(&self) -> Option<Slot<H>> {
        self.0.upgrade().map(Slot)
    }
}
