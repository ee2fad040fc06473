//! Configuration service implementation.
//!
//! Loads the user configuration from `~/.config/callbook/config.toml`.

use std::path::PathBuf;

use callbook_core::config::CallbookConfig;
use callbook_core::error::{CallbookError, Result};

use crate::paths::CallbookPaths;
use crate::storage::AtomicTomlFile;

/// Reads and writes [`CallbookConfig`].
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicTomlFile<CallbookConfig>,
}

impl ConfigService {
    /// Uses the platform configuration directory.
    pub fn new() -> Result<Self> {
        let path = CallbookPaths::config_file().map_err(|e| CallbookError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Uses an explicit config file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Loads the configuration; defaults when the file does not exist.
    pub fn load(&self) -> Result<CallbookConfig> {
        match self.file.load()? {
            Some(config) => Ok(config),
            None => {
                tracing::debug!(
                    "[ConfigService] no config at {}, using defaults",
                    self.file.path().display()
                );
                Ok(CallbookConfig::default())
            }
        }
    }

    pub fn save(&self, config: &CallbookConfig) -> Result<()> {
        self.file.save(config)?;
        Ok(())
    }
}
