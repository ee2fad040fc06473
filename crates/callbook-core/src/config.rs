use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::call::SortKey;

/// User configuration, stored as `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CallbookConfig {
    /// Where the catalog, collections and history live. Platform data dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Initial pool ordering for editors.
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_sort() -> String {
    SortKey::Alphabetical.to_string()
}

fn default_log_filter() -> String {
    "callbook=info".to_string()
}

impl Default for CallbookConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_sort: default_sort(),
            log_filter: default_log_filter(),
        }
    }
}

impl CallbookConfig {
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_key(&self.default_sort)
    }
}
