//! Rendering of round outcomes

pub mod console;
pub mod formatter;
