//! Infrastructure layer for offer-council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the reasoning service client, policy loading,
//! conversation transcripts, and configuration file loading.

pub mod config;
pub mod logging;
pub mod policy;
pub mod reasoning;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileReasoningConfig,
    FileRoundConfig,
};
pub use logging::JsonlConversationLogger;
pub use policy::FilePolicyProvider;
pub use reasoning::{OpenAiReasoningClient, RetryPolicy};
