//! Output configuration from TOML (`[output]` section)

use council_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format; `None` lets the CLI default apply.
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let config: FileOutputConfig = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(config.color);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(toml::from_str::<FileOutputConfig>(r#"format = "xml""#).is_err());
    }
}
