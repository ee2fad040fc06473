//! Review selector vocabulary.
//!
//! Review results are always alphabetical; the global sort setting does not
//! apply to this view.

use std::collections::HashSet;

use crate::call::{Call, CallPredicate, SortKey, sort_calls};

/// Which slice of the catalog to review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewFilter {
    All,
    EverUsed,
    NeverUsed,
    /// Calls with no History entries at all.
    New,
    /// Calls that are members of the named session.
    Session(String),
    /// Calls carrying the given group tag.
    Group(String),
}

impl ReviewFilter {
    /// The store predicate answering this filter, if it maps onto one.
    ///
    /// `All` and `Session` are answered from the full catalog instead.
    pub fn predicate(&self) -> Option<CallPredicate> {
        match self {
            ReviewFilter::EverUsed => Some(CallPredicate::EverUsed(true)),
            ReviewFilter::NeverUsed => Some(CallPredicate::EverUsed(false)),
            ReviewFilter::New => Some(CallPredicate::IsNew),
            ReviewFilter::Group(tag) => Some(CallPredicate::Group(tag.clone())),
            ReviewFilter::All | ReviewFilter::Session(_) => None,
        }
    }
}

/// Orders review results by name.
pub fn review_order(calls: &[Call]) -> Vec<Call> {
    sort_calls(calls, SortKey::Alphabetical)
}

/// Keeps the catalog calls named in `members`, alphabetically.
pub fn restrict_to_members(catalog: &[Call], members: &[String]) -> Vec<Call> {
    let wanted: HashSet<&str> = members.iter().map(String::as_str).collect();
    let matching: Vec<Call> = catalog
        .iter()
        .filter(|c| wanted.contains(c.name.as_str()))
        .cloned()
        .collect();
    review_order(&matching)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert_eq!(ReviewFilter::EverUsed.predicate(), Some(CallPredicate::EverUsed(true)));
        assert_eq!(ReviewFilter::NeverUsed.predicate(), Some(CallPredicate::EverUsed(false)));
        assert_eq!(ReviewFilter::New.predicate(), Some(CallPredicate::IsNew));
        assert_eq!(
            ReviewFilter::Group("turns".into()).predicate(),
            Some(CallPredicate::Group("turns".into()))
        );
        assert_eq!(ReviewFilter::All.predicate(), None);
        assert_eq!(ReviewFilter::Session("Monday".into()).predicate(), None);
    }

    #[test]
    fn test_restrict_to_members_sorts_by_name() {
        let catalog = vec![Call::named("C"), Call::named("A"), Call::named("B")];
        let result = restrict_to_members(&catalog, &["C".to_string(), "A".to_string(), "Z".to_string()]);
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
