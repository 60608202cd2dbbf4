//! Domain layer for offer-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council judges a proposed promotional offer in two steps:
//!
//! - **Specialists**: a fixed panel of roles (`offer_iq`, `creative`,
//!   `shopper`, `retail`) each judge the same context independently
//! - **Chair**: one seat reconciles the full ordered panel into an
//!   authoritative result
//!
//! ## Modes
//!
//! - **Evaluation** (default): verdicts, scores and must-fix lists
//! - **Improvement**: role-specific proposals folded into at most two
//!   upgrade packages
//!
//! Raw reasoning-service output enters through [`parsing`] and is checked
//! by [`guard`] before it leaves a round.

pub mod config;
pub mod core;
pub mod guard;
pub mod offer;
pub mod orchestration;
pub mod panel;
pub mod parsing;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::error::DomainError;
pub use guard::{FindingCode, Severity, ValidationError, ValidationFinding, ValidationPolicy};
pub use offer::{
    AmbitionSetting, BaseValue, BaseValueKind, CadenceLabel, CampaignMeta, Context,
    EntryThreshold, OfferPatch, OfferState, ScaleZone, ThresholdKind,
};
pub use orchestration::{CouncilMode, RoundPhase, RoundTracker, Seat};
pub use panel::{
    ChairImprovementResult, ChairResult, ChairScores, EvaluationBundle, ImprovementDetail,
    SpecialistImprovementResult, SpecialistResult, SpecialistRole, SpecialistSnapshot,
    UpgradePackage, Verdict,
};
pub use parsing::{
    SchemaParseError, SchemaParseKind, parse_chair, parse_chair_improvement, parse_specialist,
    parse_specialist_improvement,
};
pub use prompt::PromptComposer;
