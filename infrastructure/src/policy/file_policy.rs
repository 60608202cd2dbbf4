//! Reads the business policy from a text file.

use async_trait::async_trait;
use council_application::{PolicyError, PolicyProvider};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`PolicyProvider`] backed by a UTF-8 file, re-read on every call.
#[derive(Debug, Clone)]
pub struct FilePolicyProvider {
    path: PathBuf,
}

impl FilePolicyProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PolicyProvider for FilePolicyProvider {
    async fn load_policy(&self) -> Result<String, PolicyError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                debug!("Loaded policy from {} ({} bytes)", self.path.display(), text.len());
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(PolicyError::NotFound(self.path.display().to_string()))
            }
            Err(e) => Err(PolicyError::Io(format!("{}: {}", self.path.display(), e))),
        }
    }
}
