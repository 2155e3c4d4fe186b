//! # pack-flow
//!
//! The logic behind a trading-card pack-opening experience: choose a pack,
//! open it, reveal the cards, show a summary.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Free**: Presentation layers read `Session` and call the
//!    controller. Animation timing and reveal pacing stay on their side.
//!
//! 2. **Single Writer**: `PackFlowController` owns the session; every
//!    mutation is one of four transitions.
//!
//! 3. **Reproducible Draws**: Draws use a seedable ChaCha8 RNG that can
//!    be checkpointed and restored.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Rarities, cards, packs, catalog
//! - `flow`: State machine, session, reward policy
//! - `reveal`: Reveal-screen progress tracking
//! - `summary`: Collection summary

pub mod core;
pub mod cards;
pub mod flow;
pub mod reveal;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{DrawRng, DrawRngState, FlowConfig, FlowError, FlowResult};

pub use crate::cards::{Card, CardId, CardStats, Catalog, Pack, PackId, Rarity};

pub use crate::flow::{draw_reward, Draw, FlowState, PackFlowController, Session};

pub use crate::reveal::RevealTracker;
pub use crate::summary::CollectionSummary;
