//! Presentation-level configuration
//!
//! The output settings actually used for one invocation, after the CLI
//! flags have been laid over the config file.

use council_domain::OutputFormat;

/// Resolved output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flag wins over the config file, which wins over the default.
    ///
    /// JSON output never carries color or progress, so it can be piped
    /// straight into `improve --evaluation`.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        file_color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format.or(file_format).unwrap_or_default();
        let json = format == OutputFormat::Json;
        Self {
            format,
            color: file_color && !json,
            show_progress: !quiet && !json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file() {
        let config = OutputConfig::resolve(Some(OutputFormat::Full), Some(OutputFormat::Json), true, false);
        assert_eq!(config.format, OutputFormat::Full);
        assert!(config.color);
        assert!(config.show_progress);
    }

    #[test]
    fn test_defaults_to_summary() {
        assert_eq!(
            OutputConfig::resolve(None, None, true, false),
            OutputConfig::default()
        );
    }

    #[test]
    fn test_json_disables_color_and_progress() {
        let config = OutputConfig::resolve(None, Some(OutputFormat::Json), true, false);
        assert!(!config.color);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_quiet_hides_progress() {
        let config = OutputConfig::resolve(None, None, false, true);
        assert!(!config.color);
        assert!(!config.show_progress);
    }
}
