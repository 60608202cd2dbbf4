//! Configuration file loading for offer-council
//!
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_` environment variables (`COUNCIL_ROUND__VALIDATION=flag`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. Global: `$XDG_CONFIG_HOME/offer-council/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileReasoningConfig, FileRoundConfig,
};
pub use loader::ConfigLoader;
