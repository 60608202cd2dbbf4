//! Evaluation-mode chair result

use super::role::SpecialistRole;
use super::specialist::SpecialistResult;
use super::verdict::Verdict;
use crate::offer::ScaleZone;
use serde::{Deserialize, Serialize};

/// The six named chair scores, each in `0.0..=10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChairScores {
    pub objective_fit: f64,
    pub hook_strength: f64,
    pub mechanic_fit: f64,
    pub frequency_feel: f64,
    pub friction: f64,
    pub retail_readiness: f64,
}

impl ChairScores {
    pub const NAMES: [&'static str; 6] = [
        "objective_fit",
        "hook_strength",
        "mechanic_fit",
        "frequency_feel",
        "friction",
        "retail_readiness",
    ];

    pub fn uniform(score: f64) -> Self {
        Self {
            objective_fit: score,
            hook_strength: score,
            mechanic_fit: score,
            frequency_feel: score,
            friction: score,
            retail_readiness: score,
        }
    }

    /// Scores paired with their names, in [`ChairScores::NAMES`] order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("objective_fit", self.objective_fit),
            ("hook_strength", self.hook_strength),
            ("mechanic_fit", self.mechanic_fit),
            ("frequency_feel", self.frequency_feel),
            ("friction", self.friction),
            ("retail_readiness", self.retail_readiness),
        ]
    }

    pub fn average(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum::<f64>() / 6.0
    }
}

/// The chair's view of one specialist, in declared role order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistSnapshot {
    pub role: SpecialistRole,
    pub verdict: Verdict,
    pub headline: String,
}

impl From<&SpecialistResult> for SpecialistSnapshot {
    fn from(result: &SpecialistResult) -> Self {
        Self {
            role: result.role,
            verdict: result.verdict,
            headline: result.headline.clone(),
        }
    }
}

/// The authoritative judgment of an Evaluation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChairResult {
    pub verdict: Verdict,
    pub scores: ChairScores,
    #[serde(default)]
    pub top_reasons: Vec<String>,
    #[serde(default)]
    pub must_fix: Vec<String>,
    #[serde(default)]
    pub quick_wins: Vec<String>,
    #[serde(default)]
    pub benchmark: String,
    #[serde(default)]
    pub specialists: Vec<SpecialistSnapshot>,
    /// Scale zone the chair settles on, when it states one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_zone: Option<ScaleZone>,
    /// Stated reason for settling below the requested ambition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambition_justification: Option<String>,
    /// Whose position the chair backs when the panel is split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ChairResult {
    pub fn new(verdict: Verdict, scores: ChairScores) -> Self {
        Self {
            verdict,
            scores,
            top_reasons: Vec::new(),
            must_fix: Vec::new(),
            quick_wins: Vec::new(),
            benchmark: String::new(),
            specialists: Vec::new(),
            recommended_zone: None,
            ambition_justification: None,
            backing: None,
            notes: None,
        }
    }

    pub fn with_recommended_zone(mut self, zone: ScaleZone) -> Self {
        self.recommended_zone = Some(zone);
        self
    }

    pub fn with_ambition_justification(mut self, text: impl Into<String>) -> Self {
        self.ambition_justification = Some(text.into());
        self
    }

    pub fn with_backing(mut self, text: impl Into<String>) -> Self {
        self.backing = Some(text.into());
        self
    }
}
