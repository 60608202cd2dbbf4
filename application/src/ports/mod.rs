//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod policy_provider;
pub mod progress;
pub mod reasoning_client;
