//! Prompt composition
//!
//! `compose(seat, mode, policy)` layers three blocks, in order:
//!
//! 1. the mode-common contract for the seat (specialist or chair),
//!    followed by the payload field glossary and the ground rules;
//! 2. the role specialization and its must-mention line (specialists only);
//! 3. the policy text, verbatim.
//!
//! Composition is pure: the same inputs always produce the same string.

use super::contract::{
    CONTEXT_FIELDS, EVALUATION_CHAIR, EVALUATION_SPECIALIST, GROUND_RULES, IMPROVEMENT_CHAIR,
    IMPROVEMENT_SPECIALIST,
};
use super::roles::specialization;
use crate::orchestration::{CouncilMode, Seat};

/// Header placed directly above the verbatim policy text.
pub const POLICY_HEADER: &str = "## Policy (binding, verbatim)";

const NO_POLICY: &str = "(no additional policy supplied)";

/// Builds complete instruction strings for each seat.
pub struct PromptComposer;

impl PromptComposer {
    /// Compose the full instruction text for `seat` in `mode`.
    pub fn compose(seat: Seat, mode: CouncilMode, policy_text: &str) -> String {
        let common = Self::common_block(seat, mode);

        let mut prompt = String::with_capacity(common.len() + policy_text.len() + 4096);
        prompt.push_str(common);
        prompt.push_str("\n\n");
        prompt.push_str(CONTEXT_FIELDS);
        prompt.push_str("\n\n");
        prompt.push_str(GROUND_RULES);

        if let Seat::Specialist(role) = seat {
            let spec = specialization(role);
            prompt.push_str("\n\n");
            prompt.push_str(spec.specialize(mode));
            prompt.push('\n');
            prompt.push_str(&spec.must_mention_line());
        }

        prompt.push_str("\n\n");
        prompt.push_str(POLICY_HEADER);
        prompt.push_str("\n\n");
        if policy_text.trim().is_empty() {
            prompt.push_str(NO_POLICY);
        } else {
            prompt.push_str(policy_text);
        }
        prompt.push('\n');

        prompt
    }

    fn common_block(seat: Seat, mode: CouncilMode) -> &'static str {
        match (seat.is_chair(), mode) {
            (false, CouncilMode::Evaluation) => EVALUATION_SPECIALIST,
            (false, CouncilMode::Improvement) => IMPROVEMENT_SPECIALIST,
            (true, CouncilMode::Evaluation) => EVALUATION_CHAIR,
            (true, CouncilMode::Improvement) => IMPROVEMENT_CHAIR,
        }
    }
}
