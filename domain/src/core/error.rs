//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No specialist roles declared for the round")]
    NoRoles,

    #[error("Duplicate specialist role: {0}")]
    DuplicateRole(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),

    #[error("Invalid round transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
