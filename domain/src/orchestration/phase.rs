//! Round state machine
//!
//! ```text
//! Init ─► SpecialistsRunning ─► SpecialistsDone ─► ChairRunning ─► Complete
//!   │              │                    │                │
//!   └──────────────┴────────────────────┴────────────────┴──► Failed
//! ```
//!
//! The chair can only start once the specialist round has fully settled;
//! there is no edge from `SpecialistsRunning` to `ChairRunning`.

use super::mode::CouncilMode;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Init,
    SpecialistsRunning,
    SpecialistsDone,
    ChairRunning,
    Complete,
    Failed,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Init => "init",
            RoundPhase::SpecialistsRunning => "specialists_running",
            RoundPhase::SpecialistsDone => "specialists_done",
            RoundPhase::ChairRunning => "chair_running",
            RoundPhase::Complete => "complete",
            RoundPhase::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoundPhase::Init => "Init",
            RoundPhase::SpecialistsRunning => "Specialist Round",
            RoundPhase::SpecialistsDone => "Specialists Settled",
            RoundPhase::ChairRunning => "Chair Round",
            RoundPhase::Complete => "Complete",
            RoundPhase::Failed => "Failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundPhase::Complete | RoundPhase::Failed)
    }

    pub fn can_transition_to(&self, next: RoundPhase) -> bool {
        use RoundPhase::*;
        match (self, next) {
            (from, Failed) => !from.is_terminal(),
            (Init, SpecialistsRunning)
            | (SpecialistsRunning, SpecialistsDone)
            | (SpecialistsDone, ChairRunning)
            | (ChairRunning, Complete) => true,
            _ => false,
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks one round through its phases and records the path taken.
#[derive(Debug, Clone)]
pub struct RoundTracker {
    mode: CouncilMode,
    phase: RoundPhase,
    history: Vec<RoundPhase>,
}

impl RoundTracker {
    pub fn new(mode: CouncilMode) -> Self {
        Self {
            mode,
            phase: RoundPhase::Init,
            history: vec![RoundPhase::Init],
        }
    }

    pub fn mode(&self) -> CouncilMode {
        self.mode
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn history(&self) -> &[RoundPhase] {
        &self.history
    }

    /// Move to `next`, rejecting edges the state machine does not have.
    pub fn advance(&mut self, next: RoundPhase) -> Result<RoundPhase, DomainError> {
        if !self.phase.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.phase.to_string(),
                to: next.to_string(),
            });
        }
        self.phase = next;
        self.history.push(next);
        Ok(next)
    }

    /// Mark the round failed. No-op once a terminal phase is reached.
    pub fn fail(&mut self) {
        if !self.phase.is_terminal() {
            self.phase = RoundPhase::Failed;
            self.history.push(RoundPhase::Failed);
        }
    }
}
