/// Visibility state of one observed element. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// What the observer callback should do for an intersection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// First qualifying intersection: mark revealed and stop observing.
    Reveal,
    /// Already revealed; make sure it is no longer observed.
    Unobserve,
    Ignore,
}

/// One-shot reveal bookkeeping, indexed by the id handed out by `track`.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element; returns its id.
    pub fn track(&mut self) -> usize {
        self.states.push(RevealState::Hidden);
        self.states.len() - 1
    }

    pub fn state(&self, id: usize) -> Option<RevealState> {
        self.states.get(id).copied()
    }

    pub fn on_intersection(&mut self, id: usize, intersecting: bool) -> RevealAction {
        match self.states.get_mut(id) {
            None => RevealAction::Ignore,
            Some(RevealState::Revealed) => RevealAction::Unobserve,
            Some(state) if intersecting => {
                *state = RevealState::Revealed;
                RevealAction::Reveal
            }
            Some(_) => RevealAction::Ignore,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
