//! Reasoning client port
//!
//! Defines the interface for calling the external reasoning service. This is
//! the only network boundary of a council round.

use async_trait::async_trait;
use council_domain::Seat;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during a reasoning call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReasoningError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Service returned status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl ReasoningError {
    /// Whether an adapter may retry the call after a backoff.
    pub fn is_retryable(&self) -> bool {
        match self {
            ReasoningError::Connection(_) | ReasoningError::RateLimited(_) => true,
            ReasoningError::Status { code, .. } => *code >= 500,
            _ => false,
        }
    }
}

/// One call to the reasoning service.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasoningRequest {
    /// Who is asking; adapters pick the model by seat
    pub seat: Seat,
    /// Role/system instructions
    pub instructions: String,
    /// Structured input the instructions refer to
    pub payload: Value,
    pub temperature: f32,
    /// The response must be a single JSON object
    pub expect_json: bool,
    pub max_output_length: u32,
}

/// Gateway to the reasoning service
///
/// Implementations (adapters) live in the infrastructure layer. Returns the
/// raw text of the response; callers never assume it is well formed.
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    async fn complete(&self, request: &ReasoningRequest) -> Result<String, ReasoningError>;
}
