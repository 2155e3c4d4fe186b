//! Core building blocks: RNG, configuration and errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{FlowConfig, DEFAULT_DRAW_SIZE};
pub use error::{FlowError, FlowResult};
pub use rng::{DrawRng, DrawRngState};
