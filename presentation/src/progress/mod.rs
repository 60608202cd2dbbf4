//! Progress display for running rounds

pub mod reporter;
