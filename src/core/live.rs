/// Transient items (ripple elements) that stay registered until something
/// releases them. Whatever is still registered at shutdown comes back from
/// [`LiveSet::drain`] so the owner can clean it up.
#[derive(Debug)]
pub struct LiveSet<T> {
    next_id: u32,
    items: Vec<(u32, T)>,
}

impl<T> Default for LiveSet<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
        }
    }
}

impl<T> LiveSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: T) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push((id, item));
        id
    }

    /// Hand back the item registered under `id`. A second release of the
    /// same id yields `None`.
    pub fn release(&mut self, id: u32) -> Option<T> {
        let pos = self.items.iter().position(|(i, _)| *i == id)?;
        Some(self.items.swap_remove(pos).1)
    }

    /// Everything not yet released, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        self.items.sort_by_key(|(id, _)| *id);
        self.items.drain(..).map(|(_, item)| item).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
