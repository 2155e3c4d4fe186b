//! The pack-opening flow controller.
//!
//! ```text
//! selection --select_pack--> opening --complete_opening--> revealing --complete_reveal--> summary
//! (any state) --reset_to_selection--> selection
//! ```
//!
//! Any other transition returns `FlowError::InvalidTransition` and leaves
//! the session untouched.

use crate::cards::{Card, Catalog, Pack, PackId};
use crate::core::{DrawRng, DrawRngState, FlowConfig, FlowError, FlowResult};
use crate::summary::CollectionSummary;

use super::reward::draw_reward;
use super::state::{FlowState, Session};

/// Owns the session and the reward-draw RNG.
///
/// ## Example
///
/// ```
/// use pack_flow::cards::{Catalog, PackId};
/// use pack_flow::flow::{FlowState, PackFlowController};
///
/// let mut flow = PackFlowController::with_seed(Catalog::default_mock(), 42).unwrap();
///
/// flow.select_pack_by_id(&PackId::new("elite-collection")).unwrap();
/// flow.complete_opening().unwrap();
/// flow.complete_reveal().unwrap();
///
/// assert_eq!(flow.state(), FlowState::Summary);
/// assert_eq!(flow.session().drawn_cards().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct PackFlowController {
    catalog: Catalog,
    config: FlowConfig,
    rng: DrawRng,
    session: Session,
}

impl PackFlowController {
    /// Create a controller. Seeds from entropy unless `config.seed` is set.
    ///
    /// Fails if the draw size is zero or the card pool cannot fill a pack.
    pub fn new(catalog: Catalog, config: FlowConfig) -> FlowResult<Self> {
        if config.draw_size == 0 {
            return Err(FlowError::ZeroDrawSize);
        }
        let pool = catalog.cards().len();
        if pool < config.draw_size {
            return Err(FlowError::PoolTooSmall {
                pool,
                draw_size: config.draw_size,
            });
        }

        let rng = match config.seed {
            Some(seed) => DrawRng::new(seed),
            None => DrawRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), draw_size = config.draw_size, "flow controller created");

        Ok(Self {
            catalog,
            config,
            rng,
            session: Session::new(),
        })
    }

    /// Create a controller with default config and a fixed seed.
    pub fn with_seed(catalog: Catalog, seed: u64) -> FlowResult<Self> {
        Self::new(catalog, FlowConfig::new().with_seed(seed))
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        self.session.state()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Checkpoint of the draw RNG.
    #[must_use]
    pub fn rng_state(&self) -> DrawRngState {
        self.rng.state()
    }

    /// Restore the draw RNG from a checkpoint.
    pub fn restore_rng(&mut self, state: &DrawRngState) {
        self.rng = DrawRng::from_state(state);
    }

    /// Choose a pack. Only valid in `Selection`.
    pub fn select_pack(&mut self, pack: Pack) -> FlowResult<()> {
        self.expect_state(FlowState::Selection, "select_pack")?;

        tracing::debug!(pack = %pack.id, rarity = %pack.rarity, "pack selected");
        self.session.begin_opening(pack);
        Ok(())
    }

    /// Choose a catalog pack by id.
    pub fn select_pack_by_id(&mut self, id: &PackId) -> FlowResult<()> {
        self.expect_state(FlowState::Selection, "select_pack")?;

        let pack = self
            .catalog
            .pack(id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownPack(id.clone()))?;
        self.select_pack(pack)
    }

    /// Opening animation finished: draw the cards. Only valid in `Opening`.
    pub fn complete_opening(&mut self) -> FlowResult<&[Card]> {
        self.expect_state(FlowState::Opening, "complete_opening")?;

        let Some(pack) = self.session.selected_pack() else {
            return Err(self.reject("complete_opening"));
        };
        let draw = draw_reward(pack, self.catalog.cards(), &mut self.rng, self.config.draw_size);

        tracing::debug!(
            pack = %pack.id,
            cards = draw.len(),
            best = ?draw.iter().map(|c| c.rarity).max(),
            "pack opened"
        );
        self.session.begin_reveal(draw);
        Ok(self.session.drawn_cards())
    }

    /// Every card has been revealed. Only valid in `Revealing` with a full draw.
    pub fn complete_reveal(&mut self) -> FlowResult<()> {
        self.expect_state(FlowState::Revealing, "complete_reveal")?;

        let drawn = self.session.drawn_cards().len();
        if drawn != self.config.draw_size {
            tracing::warn!(drawn, expected = self.config.draw_size, "reveal with incomplete draw");
            return Err(FlowError::IncompleteDraw {
                drawn,
                expected: self.config.draw_size,
            });
        }

        tracing::debug!("reveal complete");
        self.session.finish_reveal();
        Ok(())
    }

    /// Return to pack selection from any state.
    pub fn reset_to_selection(&mut self) {
        tracing::debug!(from = %self.state(), "reset to selection");
        self.session.reset();
    }

    /// Summary of the opened pack, available in `Summary`.
    #[must_use]
    pub fn summary(&self) -> Option<CollectionSummary> {
        if self.state() != FlowState::Summary {
            return None;
        }
        let pack = self.session.selected_pack()?;
        Some(CollectionSummary::new(pack, self.session.drawn_cards()))
    }

    fn expect_state(&self, expected: FlowState, operation: &'static str) -> FlowResult<()> {
        if self.state() == expected {
            Ok(())
        } else {
            Err(self.reject(operation))
        }
    }

    fn reject(&self, operation: &'static str) -> FlowError {
        tracing::warn!(operation, from = %self.state(), "ignored invalid transition");
        FlowError::InvalidTransition {
            operation,
            from: self.state(),
        }
    }
}
