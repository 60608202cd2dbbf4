//! Evaluation-mode specialist result

use super::chair::ChairResult;
use super::role::SpecialistRole;
use super::verdict::Verdict;
use crate::offer::{CadenceLabel, ScaleZone};
use serde::{Deserialize, Serialize};

/// One specialist's judgment in an Evaluation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistResult {
    pub role: SpecialistRole,
    pub verdict: Verdict,
    /// One-sentence headline
    pub headline: String,
    pub scale_zone: ScaleZone,
    pub cadence_label: CadenceLabel,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub must_fix: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    /// Free text addressed to the chair
    #[serde(default)]
    pub notes_for_chair: String,
}

impl SpecialistResult {
    pub fn new(role: SpecialistRole, verdict: Verdict, headline: impl Into<String>) -> Self {
        Self {
            role,
            verdict,
            headline: headline.into(),
            scale_zone: ScaleZone::NotApplicable,
            cadence_label: CadenceLabel::Unknown,
            key_points: Vec::new(),
            must_fix: Vec::new(),
            nice_to_have: Vec::new(),
            notes_for_chair: String::new(),
        }
    }

    pub fn with_scale_zone(mut self, zone: ScaleZone) -> Self {
        self.scale_zone = zone;
        self
    }

    pub fn with_cadence_label(mut self, label: CadenceLabel) -> Self {
        self.cadence_label = label;
        self
    }

    pub fn with_must_fix(mut self, item: impl Into<String>) -> Self {
        self.must_fix.push(item.into());
        self
    }
}

/// Complete output of an Evaluation round; input to an Improvement round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBundle {
    pub chair: ChairResult,
    pub specialists: Vec<SpecialistResult>,
}

impl EvaluationBundle {
    pub fn new(chair: ChairResult, specialists: Vec<SpecialistResult>) -> Self {
        Self { chair, specialists }
    }

    /// The prior result of `role`, if it sat on the evaluation panel.
    pub fn specialist(&self, role: SpecialistRole) -> Option<&SpecialistResult> {
        self.specialists.iter().find(|s| s.role == role)
    }

    pub fn roles(&self) -> Vec<SpecialistRole> {
        self.specialists.iter().map(|s| s.role).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::chair::ChairScores;

    #[test]
    fn test_bundle_lookup_by_role() {
        let specialists = vec![
            SpecialistResult::new(SpecialistRole::OfferIq, Verdict::Go, "Value is clear."),
            SpecialistResult::new(SpecialistRole::Retail, Verdict::Kill, "Stores cannot run it."),
        ];
        let chair = ChairResult::new(Verdict::Iterate, ChairScores::uniform(5.0));
        let bundle = EvaluationBundle::new(chair, specialists);

        assert_eq!(
            bundle.specialist(SpecialistRole::Retail).map(|s| s.verdict),
            Some(Verdict::Kill)
        );
        assert!(bundle.specialist(SpecialistRole::Creative).is_none());
        assert_eq!(
            bundle.roles(),
            vec![SpecialistRole::OfferIq, SpecialistRole::Retail]
        );
    }
}
