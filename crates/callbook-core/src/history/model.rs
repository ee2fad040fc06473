//! History domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cumulative usage of one call, derived from finished sessions.
///
/// `uses` is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// Name of the call this history belongs to.
    pub name: String,
    #[serde(default)]
    pub ever_used: bool,
    /// Completion timestamps, oldest first.
    #[serde(default)]
    pub uses: Vec<DateTime<Utc>>,
}

impl History {
    /// History for a call that has never been run.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ever_used: false,
            uses: Vec::new(),
        }
    }

    /// A single use recorded at `timestamp`, as appended when a session finishes.
    pub fn single_use(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            ever_used: true,
            uses: vec![timestamp],
        }
    }

    /// Merges `entry` into this history.
    pub fn absorb(&mut self, entry: &History) {
        self.ever_used |= entry.ever_used;
        self.uses.extend(entry.uses.iter().copied());
    }

    /// Most recent use, if any.
    pub fn last_used(&self) -> Option<DateTime<Utc>> {
        self.uses.iter().max().copied()
    }

    pub fn num_uses(&self) -> u32 {
        u32::try_from(self.uses.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_absorb_appends_uses() {
        let first = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 2, 1, 19, 0, 0).unwrap();

        let mut history = History::empty("Swing Thru");
        assert_eq!(history.last_used(), None);

        history.absorb(&History::single_use("Swing Thru", second));
        history.absorb(&History::single_use("Swing Thru", first));

        assert!(history.ever_used);
        assert_eq!(history.uses, vec![second, first]);
        assert_eq!(history.num_uses(), 2);
        assert_eq!(history.last_used(), Some(second));
    }
}
