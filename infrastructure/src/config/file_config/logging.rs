//! Logging configuration from TOML (`[logging]` section)

use council_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of every reasoning call and finding.
    pub conversation_log: bool,
    /// Directory for the diagnostic log file and round transcripts.
    pub dir: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Where round transcripts go, if enabled.
    ///
    /// Falls back to the platform data directory when `dir` is unset.
    pub fn transcript_dir(&self) -> Option<PathBuf> {
        if !self.conversation_log {
            return None;
        }
        self.dir.clone().or_else(|| {
            dirs::data_local_dir().map(|d| d.join("offer-council").join("transcripts"))
        })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.dir {
            Some(dir) if dir.as_os_str().is_empty() => vec![ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "logging.dir".to_string(),
                },
                "logging.dir must not be empty (omit it to disable file logging)",
            )],
            Some(dir) if dir.is_file() => vec![ConfigIssue::error(
                ConfigIssueCode::Inconsistent {
                    fields: vec!["logging.dir".to_string()],
                },
                format!("logging.dir '{}' is a file, not a directory", dir.display()),
            )],
            _ => vec![],
        }
    }
}
