//! Flow state and the session it drives.
//!
//! ## Invariants
//!
//! - `drawn_cards` is non-empty only in `Revealing` or `Summary`
//! - `selected_pack` is set only in `Opening`, `Revealing` or `Summary`
//!
//! Fields are private; only the controller mutates a session, through
//! the crate-internal transition helpers below.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Pack};

/// Cards drawn from one pack. Sized for the usual five-card pack.
pub type Draw = SmallVec<[Card; 5]>;

/// The screen the flow is on. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowState {
    /// Choosing a pack from the catalog.
    #[default]
    Selection,
    /// Pack chosen; the opening animation is running.
    Opening,
    /// Cards drawn; the reveal view is flipping them.
    Revealing,
    /// All cards revealed; collection summary shown.
    Summary,
}

impl FlowState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FlowState::Selection => "selection",
            FlowState::Opening => "opening",
            FlowState::Revealing => "revealing",
            FlowState::Summary => "summary",
        }
    }

    /// Whether a pack is selected in this state.
    #[must_use]
    pub const fn has_pack(self) -> bool {
        !matches!(self, FlowState::Selection)
    }

    /// Whether cards have been drawn in this state.
    #[must_use]
    pub const fn has_cards(self) -> bool {
        matches!(self, FlowState::Revealing | FlowState::Summary)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the flow for presentation components.
///
/// Serialize-only. Sessions are built solely by the controller.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    current_state: FlowState,
    selected_pack: Option<Pack>,
    drawn_cards: Draw,
}

impl Session {
    /// A fresh session: selection, no pack, no cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        self.current_state
    }

    #[must_use]
    pub fn selected_pack(&self) -> Option<&Pack> {
        self.selected_pack.as_ref()
    }

    /// Drawn cards in reveal order.
    #[must_use]
    pub fn drawn_cards(&self) -> &[Card] {
        &self.drawn_cards
    }

    /// Whether the session is in its initial state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.current_state == FlowState::Selection
            && self.selected_pack.is_none()
            && self.drawn_cards.is_empty()
    }

    /// Check the state/field invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (self.selected_pack.is_some() == self.current_state.has_pack())
            && (self.drawn_cards.is_empty() || self.current_state.has_cards())
    }

    pub(crate) fn begin_opening(&mut self, pack: Pack) {
        self.selected_pack = Some(pack);
        self.current_state = FlowState::Opening;
    }

    pub(crate) fn begin_reveal(&mut self, cards: Draw) {
        self.drawn_cards = cards;
        self.current_state = FlowState::Revealing;
    }

    pub(crate) fn finish_reveal(&mut self) {
        self.current_state = FlowState::Summary;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
