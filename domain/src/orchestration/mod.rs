//! Orchestration domain
//!
//! Modes, seats and the round state machine shared by the Evaluation and
//! Improvement use cases.

pub mod mode;
pub mod phase;

pub use mode::{CouncilMode, Seat};
pub use phase::{RoundPhase, RoundTracker};
