//! Prompt domain
//!
//! Pure composition of instruction text and JSON payloads for every seat.

mod composer;
mod contract;
pub mod payload;
pub mod roles;

pub use composer::{POLICY_HEADER, PromptComposer};
pub use roles::{RoleSpecialization, specialization};
