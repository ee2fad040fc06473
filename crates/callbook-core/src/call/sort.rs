//! Ordering and text filtering of call lists.
//!
//! Everything here is pure: inputs are borrowed, a fresh `Vec` is returned,
//! and nothing touches usage statistics.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

use super::model::Call;

/// Sort keys understood by [`sort_calls`].
///
/// The string forms match the keys persisted in configuration. Use
/// [`SortKey::from_key`] for lenient parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum SortKey {
    /// Case-sensitive ascending by name.
    #[default]
    #[strum(to_string = "alphabetical")]
    Alphabetical,
    /// By difficulty tag, then name.
    #[strum(to_string = "plus/basic")]
    PlusBasic,
    /// Most used first, then name.
    #[strum(to_string = "numUses")]
    NumUses,
    /// Most recently used first, never-used last, then name.
    #[strum(to_string = "lastUsed")]
    LastUsed,
    /// By group tag, then name.
    #[strum(to_string = "group")]
    Group,
    /// Keeps the caller's order (the user's insertion order on the selection side).
    #[strum(
        to_string = "userOrder",
        serialize = "arrayOrder",
        serialize = "userPosition"
    )]
    UserOrder,
}

impl SortKey {
    /// Parses a sort key, falling back to [`SortKey::Alphabetical`] for
    /// anything unrecognised.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown sort key '{}', using alphabetical", key);
            SortKey::Alphabetical
        })
    }
}

/// Returns `calls` reordered by `key`.
///
/// All comparators are stable and break ties by name, so equal keys keep a
/// deterministic order.
pub fn sort_calls(calls: &[Call], key: SortKey) -> Vec<Call> {
    let mut sorted = calls.to_vec();
    match key {
        SortKey::Alphabetical => sorted.sort_by(by_name),
        SortKey::PlusBasic => sorted.sort_by(|a, b| {
            a.plus_or_basic
                .cmp(&b.plus_or_basic)
                .then_with(|| by_name(a, b))
        }),
        SortKey::NumUses => {
            sorted.sort_by(|a, b| b.num_uses.cmp(&a.num_uses).then_with(|| by_name(a, b)))
        }
        SortKey::LastUsed => sorted.sort_by(|a, b| {
            by_recency(a.last_used, b.last_used).then_with(|| by_name(a, b))
        }),
        SortKey::Group => sorted.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| by_name(a, b))),
        SortKey::UserOrder => {}
    }
    sorted
}

/// Keeps the calls whose name contains `text`, ignoring case.
///
/// Empty text returns the input unchanged. Order is preserved.
pub fn filter_calls(calls: &[Call], text: &str) -> Vec<Call> {
    if text.is_empty() {
        return calls.to_vec();
    }
    let needle = text.to_lowercase();
    calls
        .iter()
        .filter(|call| call.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns the distinct non-empty group tags in ascending order.
pub fn distinct_groups(calls: &[Call]) -> Vec<String> {
    calls
        .iter()
        .filter(|call| !call.group.is_empty())
        .map(|call| call.group.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn by_name(a: &Call, b: &Call) -> Ordering {
    a.name.cmp(&b.name)
}

// Descending, with `None` after every timestamp.
fn by_recency(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn names(calls: &[Call]) -> Vec<&str> {
        calls.iter().map(|c| c.name.as_str()).collect()
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_alphabetical_is_case_sensitive() {
        let calls = vec![
            Call::named("bravo"),
            Call::named("Charlie"),
            Call::named("Alpha"),
        ];
        let sorted = sort_calls(&calls, SortKey::Alphabetical);
        assert_eq!(names(&sorted), vec!["Alpha", "Charlie", "bravo"]);
        // input untouched
        assert_eq!(names(&calls), vec!["bravo", "Charlie", "Alpha"]);
    }

    #[test]
    fn test_plus_basic_groups_then_names() {
        let calls = vec![
            Call::new("Zoom", "", "plus"),
            Call::new("Circulate", "", "basic"),
            Call::new("Acey Deucey", "", "plus"),
            Call::new("Allemande Left", "", "basic"),
        ];
        let sorted = sort_calls(&calls, SortKey::PlusBasic);
        assert_eq!(
            names(&sorted),
            vec!["Allemande Left", "Circulate", "Acey Deucey", "Zoom"]
        );
    }

    #[test]
    fn test_num_uses_descending_with_name_ties() {
        let calls = vec![
            Call::named("Delta").with_usage(2, None),
            Call::named("Bravo").with_usage(5, None),
            Call::named("Alpha").with_usage(2, None),
        ];
        let sorted = sort_calls(&calls, SortKey::NumUses);
        assert_eq!(names(&sorted), vec!["Bravo", "Alpha", "Delta"]);
    }

    #[test]
    fn test_last_used_puts_never_used_last() {
        let calls = vec![
            Call::named("Never"),
            Call::named("Old").with_usage(1, Some(day(1))),
            Call::named("Recent").with_usage(1, Some(day(9))),
            Call::named("Also Never"),
        ];
        let sorted = sort_calls(&calls, SortKey::LastUsed);
        assert_eq!(names(&sorted), vec!["Recent", "Old", "Also Never", "Never"]);
    }

    #[test]
    fn test_group_then_name() {
        let calls = vec![
            Call::new("Swing", "turns", ""),
            Call::new("Promenade", "moves", ""),
            Call::new("Arch", "turns", ""),
        ];
        let sorted = sort_calls(&calls, SortKey::Group);
        assert_eq!(names(&sorted), vec!["Promenade", "Arch", "Swing"]);
    }

    #[test]
    fn test_user_order_is_identity() {
        let calls = vec![Call::named("C"), Call::named("A"), Call::named("B")];
        let sorted = sort_calls(&calls, SortKey::UserOrder);
        assert_eq!(names(&sorted), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::from_key("alphabetical"), SortKey::Alphabetical);
        assert_eq!(SortKey::from_key("plus/basic"), SortKey::PlusBasic);
        assert_eq!(SortKey::from_key("numUses"), SortKey::NumUses);
        assert_eq!(SortKey::from_key("lastUsed"), SortKey::LastUsed);
        assert_eq!(SortKey::from_key("group"), SortKey::Group);
        assert_eq!(SortKey::from_key("arrayOrder"), SortKey::UserOrder);
        assert_eq!(SortKey::from_key("userOrder"), SortKey::UserOrder);
        assert_eq!(SortKey::from_key("userPosition"), SortKey::UserOrder);
        assert_eq!(SortKey::from_key("shuffle"), SortKey::Alphabetical);
        assert_eq!(SortKey::UserOrder.to_string(), "userOrder");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let calls = vec![
            Call::named("Alpha"),
            Call::named("Bravo"),
            Call::named("Calibration"),
        ];
        let filtered = filter_calls(&calls, "al");
        assert_eq!(names(&filtered), vec!["Alpha", "Calibration"]);

        let unchanged = filter_calls(&calls, "");
        assert_eq!(unchanged, calls);
    }

    #[test]
    fn test_distinct_groups() {
        let calls = vec![
            Call::new("A", "turns", ""),
            Call::new("B", "", ""),
            Call::new("C", "moves", ""),
            Call::new("D", "turns", ""),
        ];
        assert_eq!(distinct_groups(&calls), vec!["moves", "turns"]);
    }
}
