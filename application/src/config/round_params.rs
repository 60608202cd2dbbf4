//! Round parameters: per-seat call settings and time bounds.
//!
//! [`RoundParams`] groups the static parameters that control a council
//! round in [`RunEvaluationUseCase`](crate::use_cases::run_evaluation::RunEvaluationUseCase)
//! and [`RunImprovementUseCase`](crate::use_cases::run_improvement::RunImprovementUseCase).
//! These are application-layer concerns, not domain policy.

use council_domain::{Seat, ValidationPolicy};
use std::time::Duration;

/// Call settings and time bounds for one council round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundParams {
    pub specialist_temperature: f32,
    pub chair_temperature: f32,
    pub specialist_max_output: u32,
    pub chair_max_output: u32,
    /// Upper bound for a single reasoning call.
    pub call_timeout: Duration,
    /// Upper bound for the whole round, specialists and chair together.
    pub round_deadline: Duration,
    /// What error-severity validation findings do to the round.
    pub validation: ValidationPolicy,
}

impl Default for RoundParams {
    fn default() -> Self {
        Self {
            specialist_temperature: 0.4,
            chair_temperature: 0.3,
            specialist_max_output: 1500,
            chair_max_output: 2500,
            call_timeout: Duration::from_secs(90),
            round_deadline: Duration::from_secs(300),
            validation: ValidationPolicy::Reject,
        }
    }
}

impl RoundParams {
    // ==================== Builder Methods ====================

    pub fn with_temperatures(mut self, specialist: f32, chair: f32) -> Self {
        self.specialist_temperature = specialist;
        self.chair_temperature = chair;
        self
    }

    pub fn with_max_output(mut self, specialist: u32, chair: u32) -> Self {
        self.specialist_max_output = specialist;
        self.chair_max_output = chair;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_round_deadline(mut self, deadline: Duration) -> Self {
        self.round_deadline = deadline;
        self
    }

    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = policy;
        self
    }

    pub fn temperature_for(&self, seat: Seat) -> f32 {
        if seat.is_chair() {
            self.chair_temperature
        } else {
            self.specialist_temperature
        }
    }

    pub fn max_output_for(&self, seat: Seat) -> u32 {
        if seat.is_chair() {
            self.chair_max_output
        } else {
            self.specialist_max_output
        }
    }
}
