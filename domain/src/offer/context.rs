//! Round input value objects.

use super::classification::{AmbitionSetting, CadenceLabel};
use super::state::OfferState;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Campaign facts supplied by the caller. Every field is nullable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMeta {
    pub duration_days: Option<u32>,
    pub total_prizes: Option<u32>,
    pub expected_entries: Option<u64>,
    pub cadence_label: Option<CadenceLabel>,
    pub cadence_text: Option<String>,
    pub mass_winner_count: Option<u32>,
    pub mass_prize_label: Option<String>,
    pub prize_pool_value: Option<f64>,
}

impl CampaignMeta {
    /// Expected winners per day, when both inputs are known.
    pub fn winners_per_day(&self) -> Option<f64> {
        match (self.total_prizes, self.duration_days) {
            (Some(prizes), Some(days)) if days > 0 => Some(prizes as f64 / days as f64),
            _ => None,
        }
    }
}

/// Immutable input to a council round.
///
/// Built once per round by the caller; the orchestrator only reads it.
/// `policy_text` is injected into instructions verbatim and never sent as
/// part of the JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub brief: String,
    pub concept: String,
    #[serde(default)]
    pub ambition: AmbitionSetting,
    #[serde(default, skip_serializing)]
    pub policy_text: String,
    #[serde(default)]
    pub meta: CampaignMeta,
    #[serde(default)]
    pub offer_state: OfferState,
}

impl Context {
    pub fn new(
        brief: impl Into<String>,
        concept: impl Into<String>,
        ambition: AmbitionSetting,
    ) -> Self {
        Self {
            brief: brief.into(),
            concept: concept.into(),
            ambition,
            policy_text: String::new(),
            meta: CampaignMeta::default(),
            offer_state: OfferState::default(),
        }
    }

    pub fn with_policy_text(mut self, policy_text: impl Into<String>) -> Self {
        self.policy_text = policy_text.into();
        self
    }

    pub fn with_meta(mut self, meta: CampaignMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_offer_state(mut self, offer_state: OfferState) -> Self {
        self.offer_state = offer_state;
        self
    }

    /// Reject contexts the panel cannot reason about at all.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.brief.trim().is_empty() && self.concept.trim().is_empty() {
            return Err(DomainError::InvalidContext(
                "brief and concept are both empty".to_string(),
            ));
        }
        if let Some(amount) = self.offer_state.base_value.amount
            && amount < 0.0
        {
            return Err(DomainError::InvalidContext(format!(
                "base value amount must not be negative (got {})",
                amount
            )));
        }
        Ok(())
    }
}
