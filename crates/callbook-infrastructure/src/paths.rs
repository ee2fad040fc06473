//! Unified path management for callbook files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/callbook/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/callbook/     # Data directory (overridable)
//! ├── calls.toml               # Call catalog
//! ├── sessions.toml            # Sessions
//! ├── templates.toml           # Templates
//! └── history.toml             # Per-call usage history
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "callbook";

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

/// Store documents inside a data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFile {
    Calls,
    Sessions,
    Templates,
    History,
}

impl StoreFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreFile::Calls => "calls.toml",
            StoreFile::Sessions => "sessions.toml",
            StoreFile::Templates => "templates.toml",
            StoreFile::History => "history.toml",
        }
    }
}

/// Path resolution rooted either at the platform directories or at an explicit data dir.
#[derive(Debug, Clone)]
pub struct CallbookPaths {
    data_dir: Option<PathBuf>,
}

impl CallbookPaths {
    /// `data_dir` overrides the platform data directory when given.
    pub fn new(data_dir: Option<&Path>) -> Self {
        Self {
            data_dir: data_dir.map(Path::to_path_buf),
        }
    }

    /// `~/.config/callbook` (platform equivalent elsewhere).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// The directory holding the store documents.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|p| p.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn store_file(&self, file: StoreFile) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(file.file_name()))
    }
}
