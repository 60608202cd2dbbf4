//! Schema parse errors

use crate::core::string::truncate;
use thiserror::Error;

/// Maximum bytes of raw output kept in log excerpts.
const EXCERPT_LEN: usize = 400;

/// Why raw model output could not be turned into a typed result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaParseKind {
    #[error("output is not valid JSON: {0}")]
    NotJson(String),

    #[error("output is JSON but not an object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

/// Raw output failed JSON parsing or shape validation.
///
/// Carries the offending raw text for diagnosis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("schema parse error: {kind} ({} bytes of raw output)", .raw.len())]
pub struct SchemaParseError {
    pub kind: SchemaParseKind,
    pub raw: String,
}

impl SchemaParseError {
    pub fn new(kind: SchemaParseKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    /// Truncated raw output suitable for a log line.
    pub fn excerpt(&self) -> String {
        truncate(&self.raw, EXCERPT_LEN)
    }
}
