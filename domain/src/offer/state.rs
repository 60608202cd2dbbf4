//! The currently agreed offer and partial edits to it.

use serde::{Deserialize, Serialize};

/// Kind of base value every qualifying shopper receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseValueKind {
    #[default]
    None,
    Cashback,
    Voucher,
    Gift,
}

impl BaseValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseValueKind::None => "none",
            BaseValueKind::Cashback => "cashback",
            BaseValueKind::Voucher => "voucher",
            BaseValueKind::Gift => "gift",
        }
    }
}

impl std::fmt::Display for BaseValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseValue {
    pub kind: BaseValueKind,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl BaseValue {
    pub fn new(kind: BaseValueKind, amount: f64) -> Self {
        Self {
            kind,
            amount: Some(amount),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    Units,
    Spend,
    Visits,
}

/// What a shopper has to do to enter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryThreshold {
    pub kind: ThresholdKind,
    pub value: f64,
}

impl EntryThreshold {
    pub fn new(kind: ThresholdKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// Currently agreed structure of value, entry threshold and prize tiers.
///
/// Baseline for every improvement-mode edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferState {
    pub base_value: BaseValue,
    pub entry_threshold: Option<EntryThreshold>,
    pub major_prizes: Vec<String>,
    pub runner_up_prizes: Vec<String>,
    pub has_guaranteed_reward: bool,
}

impl OfferState {
    pub fn with_base_value(mut self, base_value: BaseValue) -> Self {
        self.base_value = base_value;
        self
    }

    pub fn with_entry_threshold(mut self, threshold: EntryThreshold) -> Self {
        self.entry_threshold = Some(threshold);
        self
    }

    pub fn with_major_prize(mut self, prize: impl Into<String>) -> Self {
        self.major_prizes.push(prize.into());
        self
    }

    pub fn with_runner_up_prize(mut self, prize: impl Into<String>) -> Self {
        self.runner_up_prizes.push(prize.into());
        self
    }

    pub fn with_guaranteed_reward(mut self, guaranteed: bool) -> Self {
        self.has_guaranteed_reward = guaranteed;
        self
    }

    /// The guaranteed base-value type, if this offer carries one.
    pub fn guaranteed_kind(&self) -> Option<BaseValueKind> {
        if self.has_guaranteed_reward && self.base_value.kind != BaseValueKind::None {
            Some(self.base_value.kind)
        } else {
            None
        }
    }

    /// The hero prize, treated as the offer's signature element.
    pub fn signature_element(&self) -> Option<&str> {
        self.major_prizes.first().map(String::as_str)
    }

    /// Produce the after-state of applying `patch` to this offer.
    pub fn apply(&self, patch: &OfferPatch) -> OfferState {
        let mut next = self.clone();
        if let Some(base_value) = &patch.base_value {
            next.base_value = base_value.clone();
        }
        if let Some(threshold) = &patch.entry_threshold {
            next.entry_threshold = Some(threshold.clone());
        }
        if let Some(major) = &patch.major_prizes {
            next.major_prizes = major.clone();
        }
        if let Some(runner_up) = &patch.runner_up_prizes {
            next.runner_up_prizes = runner_up.clone();
        }
        if let Some(guaranteed) = patch.has_guaranteed_reward {
            next.has_guaranteed_reward = guaranteed;
        }
        next
    }
}

/// Partial edit of an [`OfferState`]; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_value: Option<BaseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_threshold: Option<EntryThreshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_prizes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_up_prizes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_guaranteed_reward: Option<bool>,
}

impl OfferPatch {
    pub fn is_empty(&self) -> bool {
        self.base_value.is_none()
            && self.entry_threshold.is_none()
            && self.major_prizes.is_none()
            && self.runner_up_prizes.is_none()
            && self.has_guaranteed_reward.is_none()
    }

    /// Guaranteed base-value type this patch would leave in place when
    /// applied on top of `before`.
    pub fn guaranteed_kind_over(&self, before: &OfferState) -> Option<BaseValueKind> {
        before.apply(self).guaranteed_kind()
    }
}
