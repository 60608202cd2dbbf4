//! Policy provider port
//!
//! The policy is free text fetched once per round by the caller and embedded
//! verbatim in every prompt.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Policy not found: {0}")]
    NotFound(String),

    #[error("Failed to read policy: {0}")]
    Io(String),
}

#[async_trait]
pub trait PolicyProvider: Send + Sync {
    async fn load_policy(&self) -> Result<String, PolicyError>;
}

/// In-memory policy, for tests and callers that already hold the text.
#[derive(Debug, Clone, Default)]
pub struct StaticPolicy {
    text: String,
}

impl StaticPolicy {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl PolicyProvider for StaticPolicy {
    async fn load_policy(&self) -> Result<String, PolicyError> {
        Ok(self.text.clone())
    }
}
