//! Panel domain
//!
//! The typed results produced by the council: one result per specialist
//! role plus one chair result, in each of the two modes.
//!
//! ```text
//! Evaluation:   SpecialistResult × N  ──►  ChairResult
//! Improvement:  SpecialistImprovementResult × N  ──►  ChairImprovementResult
//! ```
//!
//! Every value here is created fresh per round, immutable once parsed, and
//! handed back to the caller. Nothing is persisted by the council itself.

pub mod chair;
pub mod improvement;
pub mod role;
pub mod specialist;
pub mod verdict;

pub use chair::{ChairResult, ChairScores, SpecialistSnapshot};
pub use improvement::{
    ChairImprovementResult, CreativeImprovement, HookOption, ImprovementDetail, ImprovementTail,
    OfferIqImprovement, OfferOption, RetailImprovement, ShopperImprovement,
    SpecialistImprovementResult, UpgradePackage,
};
pub use role::SpecialistRole;
pub use specialist::{EvaluationBundle, SpecialistResult};
pub use verdict::Verdict;
