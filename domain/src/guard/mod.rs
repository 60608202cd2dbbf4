//! Offer-state guard and post-parse validators
//!
//! Business rules checked after parsing and before a result is returned.
//! Each validator yields [`ValidationFinding`]s; the round's
//! [`ValidationPolicy`] decides whether error-severity findings fail it.

mod chair;
mod finding;
mod improvement;
mod offer;

pub use chair::{
    is_split, reconcile_snapshots, validate_chair_ambition, validate_disagreement_backing,
};
pub use finding::{FindingCode, Severity, ValidationError, ValidationFinding, ValidationPolicy};
pub use improvement::{validate_signature_preserved, validate_slice_isolation};
pub use offer::{
    package_after_state, validate_offer_options, validate_offer_state, validate_upgrade_package,
};
