//! Output formatter trait

use council_application::{EvaluationOutcome, ImprovementOutcome};

/// Renders round outcomes for one output target
pub trait OutputFormatter {
    fn format_evaluation(&self, outcome: &EvaluationOutcome) -> String;

    fn format_improvement(&self, outcome: &ImprovementOutcome) -> String;
}
