//! Validation findings and the policy that decides whether they fail a round.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Severity level of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The result breaks a business rule.
    Error,
    /// The result is usable but should be reviewed.
    Warning,
}

/// Identifies which rule a finding comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCode {
    /// Two different guaranteed base-value types in one offer.
    SecondGuaranteedType,
    /// A package adopts an offer_iq option that was never proposed.
    UnknownOfferOption,
    /// The chair settled below the requested ambition without saying why.
    AmbitionDowngrade,
    /// Specialists disagree and the chair did not say whom it backs.
    UnbackedDisagreement,
    /// An improvement or package strays outside its role's slice.
    SliceViolation,
    /// The signature element is dropped without unanimous agreement.
    SignatureDropped,
    /// The chair's specialist snapshots did not match the actual results.
    SnapshotMismatch,
}

impl FindingCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCode::SecondGuaranteedType => "second_guaranteed_type",
            FindingCode::UnknownOfferOption => "unknown_offer_option",
            FindingCode::AmbitionDowngrade => "ambition_downgrade",
            FindingCode::UnbackedDisagreement => "unbacked_disagreement",
            FindingCode::SliceViolation => "slice_violation",
            FindingCode::SignatureDropped => "signature_dropped",
            FindingCode::SnapshotMismatch => "snapshot_mismatch",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A detected rule violation in a parsed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFinding {
    pub severity: Severity,
    pub code: FindingCode,
    pub message: String,
}

impl ValidationFinding {
    pub fn error(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "[{}] {}: {}", level, self.code, self.message)
    }
}

/// One or more error-severity findings rejected a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.findings))]
pub struct ValidationError {
    pub findings: Vec<ValidationFinding>,
}

impl ValidationError {
    pub fn new(findings: Vec<ValidationFinding>) -> Self {
        Self { findings }
    }
}

fn summarize(findings: &[ValidationFinding]) -> String {
    findings
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// What to do with error-severity findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Any error fails the round.
    #[default]
    Reject,
    /// Errors are returned alongside the result.
    Flag,
}

impl ValidationPolicy {
    /// Apply the policy: under `Reject`, any error-severity finding turns
    /// into a [`ValidationError`] carrying only the errors. Otherwise every
    /// finding is passed through.
    pub fn enforce(
        &self,
        findings: Vec<ValidationFinding>,
    ) -> Result<Vec<ValidationFinding>, ValidationError> {
        if *self == ValidationPolicy::Reject && findings.iter().any(ValidationFinding::is_error) {
            return Err(ValidationError::new(
                findings.into_iter().filter(ValidationFinding::is_error).collect(),
            ));
        }
        Ok(findings)
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(ValidationPolicy::Reject),
            "flag" => Ok(ValidationPolicy::Flag),
            other => Err(format!(
                "unknown validation policy '{}' (expected reject or flag)",
                other
            )),
        }
    }
}
