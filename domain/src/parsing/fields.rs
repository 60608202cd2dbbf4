//! Typed field access over an untrusted JSON object.

use super::error::{SchemaParseError, SchemaParseKind};
use crate::core::string::non_empty;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Upper bound for every free-text list in a result.
pub const MAX_LIST_ITEMS: usize = 5;

/// Read-only view of one JSON object, remembering its path for errors.
pub(crate) struct Fields<'a> {
    obj: &'a Map<String, Value>,
    raw: &'a str,
    prefix: String,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(obj: &'a Map<String, Value>, raw: &'a str) -> Self {
        Self {
            obj,
            raw,
            prefix: String::new(),
        }
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        }
    }

    pub(crate) fn missing(&self, name: &str) -> SchemaParseError {
        SchemaParseError::new(SchemaParseKind::MissingField(self.path(name)), self.raw)
    }

    pub(crate) fn invalid(&self, name: &str, reason: impl Into<String>) -> SchemaParseError {
        SchemaParseError::new(
            SchemaParseKind::InvalidField {
                field: self.path(name),
                reason: reason.into(),
            },
            self.raw,
        )
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.obj.get(name).filter(|v| !v.is_null())
    }

    /// Required nested object.
    pub(crate) fn object(&self, name: &str) -> Result<Fields<'a>, SchemaParseError> {
        match self.get(name) {
            Some(Value::Object(obj)) => Ok(Fields {
                obj,
                raw: self.raw,
                prefix: self.path(name),
            }),
            Some(_) => Err(self.invalid(name, "expected an object")),
            None => Err(self.missing(name)),
        }
    }

    /// Elements of an array field viewed as objects; non-object entries are
    /// skipped, a missing or non-array field yields nothing.
    pub(crate) fn objects(&self, name: &str) -> Vec<Fields<'a>> {
        let Some(Value::Array(items)) = self.get(name) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                Value::Object(obj) => Some(Fields {
                    obj,
                    raw: self.raw,
                    prefix: format!("{}[{}]", self.path(name), i),
                }),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn required_string(&self, name: &str) -> Result<String, SchemaParseError> {
        match self.get(name) {
            Some(Value::String(s)) => non_empty(s).ok_or_else(|| self.missing(name)),
            Some(_) => Err(self.invalid(name, "expected a string")),
            None => Err(self.missing(name)),
        }
    }

    /// Optional free text; numbers are stringified, blanks become `None`.
    pub(crate) fn optional_string(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => non_empty(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub(crate) fn text(&self, name: &str) -> String {
        self.optional_string(name).unwrap_or_default()
    }

    /// Bounded list of trimmed, non-empty strings. A lone string is
    /// accepted as a one-item list.
    pub(crate) fn string_list(&self, name: &str, max: usize) -> Vec<String> {
        let items: Vec<String> = match self.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => non_empty(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Some(Value::String(s)) => non_empty(s).into_iter().collect(),
            _ => Vec::new(),
        };
        items.into_iter().take(max).collect()
    }

    /// Required enum label. Present but unrecognised labels fall back to
    /// the type's default (its safe member).
    pub(crate) fn required_label<T>(&self, name: &str) -> Result<T, SchemaParseError>
    where
        T: FromStr + Default,
    {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.parse().unwrap_or_default()),
            Some(_) => Err(self.invalid(name, "expected a string label")),
            None => Err(self.missing(name)),
        }
    }

    /// Optional enum label; anything unusable yields the default.
    pub(crate) fn label<T>(&self, name: &str) -> T
    where
        T: FromStr + Default,
    {
        match self.get(name) {
            Some(Value::String(s)) => s.parse().unwrap_or_default(),
            _ => T::default(),
        }
    }

    pub(crate) fn optional_label<T>(&self, name: &str) -> Option<T>
    where
        T: FromStr + Default,
    {
        match self.get(name) {
            Some(Value::String(s)) => Some(s.parse().unwrap_or_default()),
            _ => None,
        }
    }

    /// Required 0–10 score. Numeric strings are accepted; values are
    /// clamped into range.
    pub(crate) fn score(&self, name: &str) -> Result<f64, SchemaParseError> {
        let value = match self.get(name) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
            None => return Err(self.missing(name)),
        };
        match value {
            Some(v) if v.is_finite() => Ok(v.clamp(0.0, 10.0)),
            _ => Err(self.invalid(name, "expected a number between 0 and 10")),
        }
    }

    pub(crate) fn optional_u32(&self, name: &str) -> Option<u32> {
        match self.get(name)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" => true,
                "false" | "no" => false,
                _ => default,
            },
            _ => default,
        }
    }

    /// Optional field deserialized through serde; present but malformed is
    /// an error.
    pub(crate) fn deserialize<T>(&self, name: &str) -> Result<Option<T>, SchemaParseError>
    where
        T: DeserializeOwned,
    {
        match self.get(name) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| self.invalid(name, e.to_string())),
            None => Ok(None),
        }
    }
}
