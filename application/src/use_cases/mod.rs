//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod error;
pub mod rounds;
pub mod run_evaluation;
pub mod run_improvement;

#[cfg(test)]
pub(crate) mod testing;
