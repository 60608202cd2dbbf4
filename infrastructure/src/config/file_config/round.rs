//! Round configuration from TOML (`[round]` section)

use council_application::RoundParams;
use council_domain::{ConfigIssue, ConfigIssueCode, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw round settings. Converted into [`RoundParams`] for the use cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoundConfig {
    pub specialist_temperature: f32,
    pub chair_temperature: f32,
    pub specialist_max_output: u32,
    pub chair_max_output: u32,
    pub call_timeout_secs: u64,
    pub round_deadline_secs: u64,
    /// `reject` or `flag`
    pub validation: String,
}

impl Default for FileRoundConfig {
    fn default() -> Self {
        let params = RoundParams::default();
        Self {
            specialist_temperature: params.specialist_temperature,
            chair_temperature: params.chair_temperature,
            specialist_max_output: params.specialist_max_output,
            chair_max_output: params.chair_max_output,
            call_timeout_secs: params.call_timeout.as_secs(),
            round_deadline_secs: params.round_deadline.as_secs(),
            validation: "reject".to_string(),
        }
    }
}

impl FileRoundConfig {
    /// Parse `validation` into a [`ValidationPolicy`].
    ///
    /// Unknown values fall back to `reject`.
    pub fn parse_validation(&self) -> (ValidationPolicy, Vec<ConfigIssue>) {
        match self.validation.parse::<ValidationPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "round.validation".to_string(),
                        value: self.validation.clone(),
                        valid_values: vec!["reject".to_string(), "flag".to_string()],
                    },
                    format!(
                        "round.validation: unknown value '{}', falling back to 'reject'",
                        self.validation
                    ),
                );
                (ValidationPolicy::default(), vec![issue])
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_validation().1;

        for (field, value) in [
            ("round.specialist_temperature", self.specialist_temperature),
            ("round.chair_temperature", self.chair_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                issues.push(out_of_range(field, format!("{} = {} is outside 0.0..=2.0", field, value)));
            }
        }

        for (field, value) in [
            ("round.specialist_max_output", u64::from(self.specialist_max_output)),
            ("round.chair_max_output", u64::from(self.chair_max_output)),
            ("round.call_timeout_secs", self.call_timeout_secs),
            ("round.round_deadline_secs", self.round_deadline_secs),
        ] {
            if value == 0 {
                issues.push(out_of_range(field, format!("{} must be greater than 0", field)));
            }
        }

        if self.call_timeout_secs > 0 && self.round_deadline_secs < self.call_timeout_secs {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Inconsistent {
                    fields: vec![
                        "round.call_timeout_secs".to_string(),
                        "round.round_deadline_secs".to_string(),
                    ],
                },
                format!(
                    "round.round_deadline_secs ({}) is shorter than round.call_timeout_secs ({}); \
                     the deadline will always fire first",
                    self.round_deadline_secs, self.call_timeout_secs
                ),
            ));
        }

        issues
    }

    pub fn to_round_params(&self) -> RoundParams {
        RoundParams::default()
            .with_temperatures(self.specialist_temperature, self.chair_temperature)
            .with_max_output(self.specialist_max_output, self.chair_max_output)
            .with_call_timeout(Duration::from_secs(self.call_timeout_secs))
            .with_round_deadline(Duration::from_secs(self.round_deadline_secs))
            .with_validation(self.parse_validation().0)
    }
}

fn out_of_range(field: &str, message: String) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::OutOfRange {
            field: field.to_string(),
        },
        message,
    )
}
