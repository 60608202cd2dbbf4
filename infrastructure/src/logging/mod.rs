//! Conversation transcript logging.
//!
//! Provides [`JsonlConversationLogger`], the JSONL writer behind the
//! [`ConversationLogger`](council_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
