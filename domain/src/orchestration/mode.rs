//! Council modes and seats.

use crate::panel::SpecialistRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of round the council is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouncilMode {
    /// Judge the offer: verdicts, scores, must-fix items
    #[default]
    Evaluation,
    /// Improve the offer: role-specific proposals and upgrade packages
    Improvement,
}

impl CouncilMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouncilMode::Evaluation => "evaluation",
            CouncilMode::Improvement => "improvement",
        }
    }
}

impl fmt::Display for CouncilMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A seat at the council table: one of the specialists, or the chair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "seat", content = "role")]
pub enum Seat {
    Specialist(SpecialistRole),
    Chair,
}

impl Seat {
    pub fn is_chair(&self) -> bool {
        matches!(self, Seat::Chair)
    }

    pub fn role(&self) -> Option<SpecialistRole> {
        match self {
            Seat::Specialist(role) => Some(*role),
            Seat::Chair => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Specialist(role) => write!(f, "{}", role),
            Seat::Chair => write!(f, "chair"),
        }
    }
}

impl From<SpecialistRole> for Seat {
    fn from(role: SpecialistRole) -> Self {
        Seat::Specialist(role)
    }
}
