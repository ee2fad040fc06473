//! Call domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named catalog item representing a reusable drill.
///
/// `name` is the identity of a call and never changes once it is in the
/// catalog. `num_uses` and `last_used` are derived from History by the store
/// and are only ever read by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    /// Unique key within the catalog.
    pub name: String,
    /// Category tag.
    #[serde(default)]
    pub group: String,
    /// Difficulty tag ("plus" or "basic" by convention, free-form in practice).
    #[serde(default)]
    pub plus_or_basic: String,
    /// Number of History uses recorded for this call.
    #[serde(default)]
    pub num_uses: u32,
    /// When the call was last used in a finished session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl Call {
    /// Creates a call that has never been used.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        plus_or_basic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            plus_or_basic: plus_or_basic.into(),
            num_uses: 0,
            last_used: None,
        }
    }

    /// Creates a call with only a name; the tags are left empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "", "")
    }

    /// Returns a copy with the usage statistics replaced.
    pub fn with_usage(mut self, num_uses: u32, last_used: Option<DateTime<Utc>>) -> Self {
        self.num_uses = num_uses;
        self.last_used = last_used;
        self
    }
}

/// Store-side predicate for narrowing the call catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallPredicate {
    /// Calls whose History `ever_used` flag matches.
    EverUsed(bool),
    /// Calls with no History entries at all.
    IsNew,
    /// Calls carrying the given group tag.
    Group(String),
}
