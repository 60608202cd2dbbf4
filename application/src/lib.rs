//! Application layer for offer-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RoundParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    policy_provider::{PolicyError, PolicyProvider, StaticPolicy},
    progress::{NoProgress, ProgressNotifier},
    reasoning_client::{ReasoningClient, ReasoningError, ReasoningRequest},
};
pub use use_cases::error::OrchestrationError;
pub use use_cases::rounds::{CouncilRounds, RoundControl};
pub use use_cases::run_evaluation::{EvaluationOutcome, RunEvaluationUseCase};
pub use use_cases::run_improvement::{ImprovementOutcome, RunImprovementUseCase};
