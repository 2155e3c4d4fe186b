//! Reveal-screen progress.
//!
//! Tracks which drawn cards have been flipped. This is view state: the
//! controller never sees it. The reveal view calls
//! `PackFlowController::complete_reveal` once `all_revealed()` holds.

use smallvec::SmallVec;

/// Which cards of a draw have been revealed, and in what order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    card_count: usize,
    revealed: SmallVec<[usize; 5]>,
    current: usize,
}

impl RevealTracker {
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            revealed: SmallVec::new(),
            current: 0,
        }
    }

    /// Reveal one card.
    ///
    /// Returns `false` for an out-of-range or already revealed index.
    pub fn reveal(&mut self, index: usize) -> bool {
        if index >= self.card_count || self.is_revealed(index) {
            return false;
        }
        self.revealed.push(index);
        if index + 1 < self.card_count {
            self.current = index + 1;
        }
        true
    }

    /// Reveal every remaining card, in index order.
    pub fn reveal_all(&mut self) {
        for index in 0..self.card_count {
            if !self.is_revealed(index) {
                self.revealed.push(index);
            }
        }
        self.current = self.card_count;
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Index of the card the view should offer next.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.card_count > 0 && self.revealed.len() == self.card_count
    }

    /// Indices in the order they were revealed.
    #[must_use]
    pub fn revealed_order(&self) -> &[usize] {
        &self.revealed
    }
}
