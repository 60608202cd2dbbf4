//! Reasoning service adapters.
//!
//! [`OpenAiReasoningClient`] implements the
//! [`ReasoningClient`](council_application::ReasoningClient) port against any
//! OpenAI-compatible `/v1/chat/completions` endpoint.

mod openai;
mod retry;

pub use openai::OpenAiReasoningClient;
pub use retry::RetryPolicy;
