//! Per-view configuration of the collection editor.

use crate::call::SortKey;
use crate::collection::CollectionKind;

/// What a particular editor view builds and how it initially presents the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// The kind of collection the selection is saved as.
    pub selection_kind: CollectionKind,
    /// Label of the "move into selection" action.
    pub move_target_label: String,
    /// Sort key the pool starts with.
    pub default_sort: SortKey,
}

impl EditorOptions {
    /// Options for building a new session.
    pub fn session() -> Self {
        Self {
            selection_kind: CollectionKind::Session,
            move_target_label: "Add to session".to_string(),
            default_sort: SortKey::Alphabetical,
        }
    }

    /// Options for building a new template.
    pub fn template() -> Self {
        Self {
            selection_kind: CollectionKind::Template,
            move_target_label: "Add to template".to_string(),
            default_sort: SortKey::Alphabetical,
        }
    }

    /// Options for the given collection kind.
    pub fn for_kind(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::Session => Self::session(),
            CollectionKind::Template => Self::template(),
        }
    }

    pub fn with_default_sort(mut self, key: SortKey) -> Self {
        self.default_sort = key;
        self
    }
}
