/// Mutually exclusive "active" marker over a fixed list of controls
/// (navigation links, draft category buttons).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveSelection {
    len: usize,
    active: Option<usize>,
}

impl ExclusiveSelection {
    /// `initial` outside the range leaves nothing active.
    pub fn new(len: usize, initial: Option<usize>) -> Self {
        Self {
            len,
            active: initial.filter(|i| *i < len),
        }
    }

    /// Activate `index`, deactivating everything else. Out-of-range indices
    /// are rejected and leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = Some(index);
        true
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Target id of an in-page link (`#pricing` -> `pricing`). Empty fragments
/// and links to other pages yield `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
