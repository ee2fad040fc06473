//! Two-list pool/selection state with value semantics.
//!
//! Every transition returns a new `EditorState`; the previous value is left
//! intact, so a snapshot handed to a renderer can never be mutated under it.

use crate::call::Call;

/// A pool of candidate calls and the user's working selection.
///
/// The two lists are disjoint by name, and their union never changes through
/// any transition defined here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pool: Vec<Call>,
    selection: Vec<Call>,
}

impl EditorState {
    /// Starts with every call in the pool and an empty selection.
    pub fn new(pool: Vec<Call>) -> Self {
        Self {
            pool,
            selection: Vec::new(),
        }
    }

    pub fn pool(&self) -> &[Call] {
        &self.pool
    }

    pub fn selection(&self) -> &[Call] {
        &self.selection
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.iter().any(|c| c.name == name)
    }

    /// Moves `name` from the pool to the end of the selection
    /// (`to_selection == true`) or from the selection to the end of the pool.
    ///
    /// Returns `None` when `name` is not in the source list, e.g. a second
    /// click on an item that has already moved.
    pub fn moved(&self, name: &str, to_selection: bool) -> Option<EditorState> {
        let (source, destination) = if to_selection {
            (&self.pool, &self.selection)
        } else {
            (&self.selection, &self.pool)
        };

        let item = source.iter().find(|c| c.name == name)?;
        if destination.iter().any(|c| c.name == name) {
            return None;
        }

        let remaining: Vec<Call> = source.iter().filter(|c| c.name != name).cloned().collect();
        let extended: Vec<Call> = destination
            .iter()
            .cloned()
            .chain(std::iter::once(item.clone()))
            .collect();

        Some(if to_selection {
            EditorState {
                pool: remaining,
                selection: extended,
            }
        } else {
            EditorState {
                pool: extended,
                selection: remaining,
            }
        })
    }

    /// Moves every selected call back to the end of the pool, in selection order.
    pub fn with_selection_returned(&self) -> EditorState {
        EditorState {
            pool: self
                .pool
                .iter()
                .chain(self.selection.iter())
                .cloned()
                .collect(),
            selection: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn names(calls: &[Call]) -> Vec<&str> {
        calls.iter().map(|c| c.name.as_str()).collect()
    }

    fn state(pool: &[&str]) -> EditorState {
        EditorState::new(pool.iter().map(|n| Call::named(*n)).collect())
    }

    #[test]
    fn test_move_to_selection_appends() {
        let initial = state(&["Echo", "Alpha", "Bravo"]);
        let after = initial.moved("Alpha", true).unwrap();
        assert_eq!(names(after.pool()), vec!["Echo", "Bravo"]);
        assert_eq!(names(after.selection()), vec!["Alpha"]);

        let after = after.moved("Echo", true).unwrap();
        assert_eq!(names(after.selection()), vec!["Alpha", "Echo"]);

        // the original value is untouched
        assert_eq!(names(initial.pool()), vec!["Echo", "Alpha", "Bravo"]);
        assert!(initial.selection().is_empty());
    }

    #[test]
    fn test_move_absent_name_is_noop() {
        let initial = state(&["Alpha"]);
        assert!(initial.moved("Zulu", true).is_none());
        assert!(initial.moved("Alpha", false).is_none());

        let after = initial.moved("Alpha", true).unwrap();
        assert!(after.is_selected("Alpha"));
        assert!(after.moved("Alpha", true).is_none());
        assert!(!after.moved("Alpha", false).unwrap().is_selected("Alpha"));
    }

    #[test]
    fn test_move_there_and_back_restores_contents() {
        let initial = state(&["Alpha", "Bravo", "Charlie"]);
        let back = initial
            .moved("Alpha", true)
            .and_then(|s| s.moved("Alpha", false))
            .unwrap();

        assert!(back.selection().is_empty());
        // same contents, position not preserved
        assert_eq!(names(back.pool()), vec!["Bravo", "Charlie", "Alpha"]);
    }

    #[test]
    fn test_lists_stay_disjoint_and_complete() {
        let initial = state(&["A", "B", "C", "D", "E"]);
        let everything: BTreeSet<String> = initial.pool().iter().map(|c| c.name.clone()).collect();

        let script = [
            ("C", true),
            ("A", true),
            ("C", false),
            ("Q", true),
            ("E", true),
            ("A", true),
            ("E", false),
            ("B", true),
        ];
        let mut current = initial;
        for (name, to_selection) in script {
            if let Some(next) = current.moved(name, to_selection) {
                current = next;
            }
            let pool: BTreeSet<String> = current.pool().iter().map(|c| c.name.clone()).collect();
            let selection: BTreeSet<String> =
                current.selection().iter().map(|c| c.name.clone()).collect();
            assert!(pool.is_disjoint(&selection));
            assert_eq!(&pool | &selection, everything);
            assert_eq!(pool.len() + selection.len(), everything.len());
        }
        assert_eq!(names(current.selection()), vec!["A", "B"]);
    }

    #[test]
    fn test_selection_returned_in_selection_order() {
        let current = state(&["A", "B", "C"])
            .moved("C", true)
            .and_then(|s| s.moved("A", true))
            .unwrap();
        let returned = current.with_selection_returned();
        assert_eq!(names(returned.pool()), vec!["B", "C", "A"]);
        assert!(returned.selection().is_empty());
    }
}
