//! Pack-opening flow: state machine, session and reward policy.
//!
//! ## Key Types
//!
//! - `FlowState`: selection → opening → revealing → summary
//! - `Session`: Read-only view of the current flow
//! - `PackFlowController`: Owns the session; the only writer
//! - `draw_reward`: Shuffle-and-patch draw with a rarity guarantee

pub mod controller;
pub mod reward;
pub mod state;

pub use controller::PackFlowController;
pub use reward::draw_reward;
pub use state::{Draw, FlowState, Session};
