//! Reveal bookkeeping for observed sections.
//!
//! Two triggers reveal the same sections: the intersection observer as each
//! section scrolls into view, and a one-shot fallback timer that reveals
//! everything in case the observer never fires. They are redundant on
//! purpose. Revealing is idempotent, so whichever runs second converges on the
//! same fully visible end state. `RevealSet` records which trigger got to
//! each section first.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Source of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    Observer,
    Fallback,
}

/// Per-section reveal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    first: Vec<Option<RevealTrigger>>,
}

impl RevealSet {
    /// `len` sections, all hidden.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { first: vec![None; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Mark section `index` revealed. Returns `true` the first time only.
    /// Out-of-range indices are ignored.
    pub fn reveal(&mut self, index: usize, trigger: RevealTrigger) -> bool {
        let Some(slot) = self.first.get_mut(index) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(trigger);
        true
    }

    /// Mark every section revealed. Returns how many were still hidden.
    pub fn reveal_all(&mut self, trigger: RevealTrigger) -> usize {
        (0..self.first.len()).filter(|&i| self.reveal(i, trigger)).count()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed_by(index).is_some()
    }

    /// Trigger that revealed section `index` first.
    #[must_use]
    pub fn revealed_by(&self, index: usize) -> Option<RevealTrigger> {
        self.first.get(index).copied().flatten()
    }

    /// Whether no section remains hidden.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first.iter().all(Option::is_some)
    }
}
