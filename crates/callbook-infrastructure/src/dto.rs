//! On-disk document layouts.
//!
//! Each store file is one TOML document holding a schema version and an
//! array of tables. Domain types are embedded directly; the wrappers exist so
//! the layout can grow without touching the domain.
//!
//! ### Schema Version History
//! - **1**: Initial layout

use serde::{Deserialize, Serialize};

use callbook_core::call::Call;
use callbook_core::collection::Collection;
use callbook_core::history::History;

/// Current schema version written to every document.
pub const SCHEMA_VERSION: u32 = 1;

fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// `calls.toml`, also the format accepted by catalog import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallCatalogDocument {
    #[serde(default = "schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub calls: Vec<Call>,
}

impl Default for CallCatalogDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            calls: Vec::new(),
        }
    }
}

/// `sessions.toml` and `templates.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    #[serde(default = "schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Default for CollectionDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            collections: Vec::new(),
        }
    }
}

/// `history.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default = "schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub entries: Vec<History>,
}

impl Default for HistoryDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            entries: Vec::new(),
        }
    }
}
