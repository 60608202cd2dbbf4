//! Reasoning service configuration from TOML (`[reasoning]` section)

use council_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Connection settings for the OpenAI-compatible reasoning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReasoningConfig {
    /// Service root; `/v1/chat/completions` is appended.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Model used for the four specialist seats.
    pub specialist_model: String,
    /// Model used for the chair seat.
    pub chair_model: String,
    /// Extra attempts after a retryable failure (connection, 429, 5xx).
    pub max_retries: u32,
    /// HTTP client timeout per attempt.
    pub request_timeout_secs: u64,
}

impl Default for FileReasoningConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            specialist_model: "gpt-4o-mini".to_string(),
            chair_model: "gpt-4o".to_string(),
            max_retries: 2,
            request_timeout_secs: 120,
        }
    }
}

impl FileReasoningConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("reasoning.base_url", &self.base_url),
            ("reasoning.api_key_env", &self.api_key_env),
            ("reasoning.specialist_model", &self.specialist_model),
            ("reasoning.chair_model", &self.chair_model),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{} must not be empty", field),
                ));
            }
        }

        if !self.base_url.trim().is_empty()
            && !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://"))
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "reasoning.base_url".to_string(),
                    value: self.base_url.clone(),
                    valid_values: vec!["http://...".to_string(), "https://...".to_string()],
                },
                format!("reasoning.base_url: '{}' is not an http(s) URL", self.base_url),
            ));
        }

        if self.max_retries > 10 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "reasoning.max_retries".to_string(),
                },
                format!(
                    "reasoning.max_retries = {} will keep a failing round alive for a long time",
                    self.max_retries
                ),
            ));
        }

        if self.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "reasoning.request_timeout_secs".to_string(),
                },
                "reasoning.request_timeout_secs must be greater than 0",
            ));
        }

        issues
    }
}
