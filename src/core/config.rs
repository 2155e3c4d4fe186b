//! Flow configuration.
//!
//! `FlowConfig` is supplied when a controller is created. It fixes the
//! number of cards per pack and, optionally, the RNG seed so that a whole
//! session can be replayed.

use serde::{Deserialize, Serialize};

/// Cards drawn per pack.
pub const DEFAULT_DRAW_SIZE: usize = 5;

/// Controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowConfig {
    /// Number of cards drawn when a pack is opened.
    pub draw_size: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            draw_size: DEFAULT_DRAW_SIZE,
            seed: None,
        }
    }
}

impl FlowConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of cards per pack.
    #[must_use]
    pub fn with_draw_size(mut self, draw_size: usize) -> Self {
        assert!(draw_size > 0, "Draw size must be at least 1");
        self.draw_size = draw_size;
        self
    }
}
