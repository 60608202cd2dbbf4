//! Improvement-mode results
//!
//! Each specialist returns a role-specific improvement object; the chair
//! assembles at most [`ChairImprovementResult::MAX_PACKAGES`] upgrade
//! packages from them.

use super::role::SpecialistRole;
use crate::offer::{CadenceLabel, OfferPatch, ScaleZone};
use serde::{Deserialize, Serialize};

/// Fields shared by every improvement variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementTail {
    pub must_fix: Vec<String>,
    pub nice_to_have: Vec<String>,
    /// Whether this specialist agrees to drop the offer's signature element
    pub drop_signature: bool,
}

/// One offer-tuning option proposed by the value specialist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferOption {
    pub label: String,
    pub summary: String,
    #[serde(default)]
    pub patch: OfferPatch,
    #[serde(default)]
    pub scale_zone: ScaleZone,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferIqImprovement {
    pub options: Vec<OfferOption>,
    pub recommended_option: Option<String>,
}

impl OfferIqImprovement {
    pub fn option(&self, label: &str) -> Option<&OfferOption> {
        self.options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookOption {
    pub line: String,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreativeImprovement {
    pub hooks: Vec<HookOption>,
    pub story_device: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopperImprovement {
    pub simplifications: Vec<String>,
    pub steps_before: Option<u32>,
    pub steps_after: Option<u32>,
    pub suggested_cadence: CadenceLabel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailImprovement {
    pub trade_actions: Vec<String>,
    pub pos_requirements: Vec<String>,
    pub retailer_risks: Vec<String>,
}

/// Role-specific part of an improvement result, tagged by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ImprovementDetail {
    OfferIq(OfferIqImprovement),
    Creative(CreativeImprovement),
    Shopper(ShopperImprovement),
    Retail(RetailImprovement),
}

impl ImprovementDetail {
    pub fn role(&self) -> SpecialistRole {
        match self {
            ImprovementDetail::OfferIq(_) => SpecialistRole::OfferIq,
            ImprovementDetail::Creative(_) => SpecialistRole::Creative,
            ImprovementDetail::Shopper(_) => SpecialistRole::Shopper,
            ImprovementDetail::Retail(_) => SpecialistRole::Retail,
        }
    }
}

/// One specialist's improvement proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistImprovementResult {
    #[serde(flatten)]
    pub detail: ImprovementDetail,
    #[serde(flatten)]
    pub tail: ImprovementTail,
}

impl SpecialistImprovementResult {
    pub fn new(detail: ImprovementDetail, tail: ImprovementTail) -> Self {
        Self { detail, tail }
    }

    pub fn role(&self) -> SpecialistRole {
        self.detail.role()
    }

    pub fn offer_iq(&self) -> Option<&OfferIqImprovement> {
        match &self.detail {
            ImprovementDetail::OfferIq(detail) => Some(detail),
            _ => None,
        }
    }
}

/// A named bundle of changes the chair recommends shipping together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradePackage {
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub changes: Vec<String>,
    /// Specialists whose proposals informed this package
    #[serde(default)]
    pub informed_by: Vec<SpecialistRole>,
    #[serde(default)]
    pub scale_zone: ScaleZone,
    /// Edit to the offer structure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<OfferPatch>,
    /// Label of the value specialist's option this package adopts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_option: Option<String>,
    #[serde(default = "default_true")]
    pub preserves_signature: bool,
}

fn default_true() -> bool {
    true
}

impl UpgradePackage {
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            summary: String::new(),
            changes: Vec::new(),
            informed_by: Vec::new(),
            scale_zone: ScaleZone::NotApplicable,
            patch: None,
            offer_option: None,
            preserves_signature: true,
        }
    }

    pub fn informed_by(mut self, role: SpecialistRole) -> Self {
        self.informed_by.push(role);
        self
    }

    pub fn with_patch(mut self, patch: OfferPatch) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn with_offer_option(mut self, label: impl Into<String>) -> Self {
        self.offer_option = Some(label.into());
        self
    }

    pub fn with_scale_zone(mut self, zone: ScaleZone) -> Self {
        self.scale_zone = zone;
        self
    }

    /// Whether this package edits the offer structure at all.
    pub fn touches_offer(&self) -> bool {
        self.offer_option.is_some() || self.patch.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// The authoritative improvement plan of an Improvement round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChairImprovementResult {
    pub packages: Vec<UpgradePackage>,
    /// Label of the recommended package
    pub recommended: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambition_justification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ChairImprovementResult {
    pub const MAX_PACKAGES: usize = 2;

    pub fn recommended_package(&self) -> Option<&UpgradePackage> {
        self.packages
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(&self.recommended))
    }
}
