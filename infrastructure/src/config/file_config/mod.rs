//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout one-to-one and use domain
//! types where a value has a closed set of spellings.

mod logging;
mod output;
mod reasoning;
mod round;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use reasoning::FileReasoningConfig;
pub use round::FileRoundConfig;

use council_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reasoning service connection and models
    pub reasoning: FileReasoningConfig,
    /// Sampling, limits, timeouts and validation policy
    pub round: FileRoundConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic log file and conversation transcripts
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.reasoning.validate());
        issues.extend(self.round.validate());
        issues.extend(self.logging.validate());

        // The HTTP client gives up on its own before the round's per-call
        // timeout can fire.
        if self.reasoning.request_timeout_secs > 0
            && self.reasoning.request_timeout_secs < self.round.call_timeout_secs
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Inconsistent {
                    fields: vec![
                        "reasoning.request_timeout_secs".to_string(),
                        "round.call_timeout_secs".to_string(),
                    ],
                },
                format!(
                    "reasoning.request_timeout_secs ({}) is shorter than round.call_timeout_secs ({})",
                    self.reasoning.request_timeout_secs, self.round.call_timeout_secs
                ),
            ));
        }

        issues
    }

    /// True if any issue is severe enough to refuse to run.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{OutputFormat, ValidationPolicy};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[reasoning]
base_url = "http://localhost:8080"
specialist_model = "small-model"
chair_model = "large-model"
max_retries = 0

[round]
specialist_temperature = 0.2
round_deadline_secs = 120
validation = "flag"

[output]
format = "full"
color = false

[logging]
conversation_log = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.reasoning.base_url, "http://localhost:8080");
        assert_eq!(config.reasoning.chair_model, "large-model");
        assert_eq!(config.reasoning.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.reasoning.max_retries, 0);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.logging.conversation_log);

        let params = config.round.to_round_params();
        assert_eq!(params.specialist_temperature, 0.2);
        assert_eq!(params.chair_temperature, 0.3);
        assert_eq!(params.round_deadline, Duration::from_secs(120));
        assert_eq!(params.validation, ValidationPolicy::Flag);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.color);
        assert!(config.output.format.is_none());
        assert!(!config.logging.conversation_log);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_request_timeout_shorter_than_call_timeout_warns() {
        let config: FileConfig = toml::from_str(
            r#"
[reasoning]
request_timeout_secs = 30

[round]
call_timeout_secs = 60
"#,
        )
        .unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!FileConfig::has_errors(&issues));
    }

    #[test]
    fn test_errors_are_reported_across_sections() {
        let config: FileConfig = toml::from_str(
            r#"
[reasoning]
specialist_model = ""

[round]
chair_max_output = 0
"#,
        )
        .unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(FileConfig::has_errors(&issues));
    }
}
