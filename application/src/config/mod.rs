//! Application-level configuration.
//!
//! - [`RoundParams`]: per-seat call settings, timeouts and validation policy

pub mod round_params;

pub use round_params::RoundParams;
