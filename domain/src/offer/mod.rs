//! Offer domain
//!
//! The caller-supplied input of every council round: the brief and concept
//! under review, the campaign facts, and the currently agreed offer.
//!
//! - [`context::Context`]: immutable round input
//! - [`state::OfferState`] / [`state::OfferPatch`]: agreed offer and partial edits to it
//! - [`classification`]: fixed-enum labels (ambition, scale zone, cadence)

pub mod classification;
pub mod context;
pub mod state;

pub use classification::{AmbitionSetting, CadenceLabel, ScaleZone};
pub use context::{CampaignMeta, Context};
pub use state::{BaseValue, BaseValueKind, EntryThreshold, OfferPatch, OfferState, ThresholdKind};
