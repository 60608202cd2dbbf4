//! Output parsing
//!
//! Turns raw reasoning-service text into typed panel results. Everything
//! past this module is statically typed.

mod error;
mod evaluation;
mod extract;
mod fields;
mod improvement;

pub use error::{SchemaParseError, SchemaParseKind};
pub use evaluation::{parse_chair, parse_specialist};
pub use extract::extract_json_object;
pub use fields::MAX_LIST_ITEMS;
pub use improvement::{parse_chair_improvement, parse_specialist_improvement};
