//! Orchestration errors

use crate::ports::reasoning_client::ReasoningError;
use council_domain::{DomainError, SchemaParseError, Seat, SpecialistRole, ValidationError};
use thiserror::Error;

/// Errors that can fail a council round.
///
/// Every variant fails the whole round; there is no partial result.
#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("{seat} returned unusable output: {source}")]
    SchemaParse {
        seat: Seat,
        #[source]
        source: SchemaParseError,
    },

    #[error("Reasoning call for {seat} failed: {source}")]
    Reasoning {
        seat: Seat,
        #[source]
        source: ReasoningError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Reasoning call for {seat} timed out")]
    Timeout { seat: Seat },

    #[error("Round deadline exceeded")]
    RoundDeadlineExceeded,

    #[error("Round cancelled")]
    Cancelled,

    #[error("No specialist roles declared for the round")]
    NoRoles,

    #[error("Invalid round transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("No prior evaluation result for {0}")]
    MissingPriorResult(SpecialistRole),

    #[error("Invalid round input: {0}")]
    InvalidInput(String),

    #[error("Reasoning task failed: {0}")]
    TaskFailed(String),
}

impl OrchestrationError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrchestrationError::Cancelled)
    }

    /// Whether the failure came from a time bound rather than the service.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            OrchestrationError::Timeout { .. } | OrchestrationError::RoundDeadlineExceeded
        )
    }
}

impl From<DomainError> for OrchestrationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NoRoles => OrchestrationError::NoRoles,
            DomainError::Cancelled => OrchestrationError::Cancelled,
            DomainError::InvalidTransition { from, to } => {
                OrchestrationError::InvalidTransition { from, to }
            }
            other => OrchestrationError::InvalidInput(other.to_string()),
        }
    }
}
