//! JSON object extraction from raw model output.
//!
//! Normalization is deliberately narrow: surrounding whitespace and a single
//! fenced code block (```` ```json ```` or ```` ``` ````) are stripped.
//! Anything else that is not a JSON object is an error.

use super::error::{SchemaParseError, SchemaParseKind};
use serde_json::{Map, Value};

/// Parse `raw` into a JSON object.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, SchemaParseError> {
    let body = strip_code_fence(raw.trim());

    let value: Value = serde_json::from_str(body)
        .map_err(|e| SchemaParseError::new(SchemaParseKind::NotJson(e.to_string()), raw))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SchemaParseError::new(SchemaParseKind::NotAnObject, raw)),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening fence line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}
