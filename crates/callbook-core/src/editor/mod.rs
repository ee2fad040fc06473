//! Collection editor domain module.
//!
//! One parameterised editor serves every "pool on the left, selection on the
//! right" view; [`EditorOptions`] captures what differs between them.
//!
//! # Module Structure
//!
//! - `state`: immutable pool/selection transitions
//! - `options`: per-view configuration
//! - `collection_editor`: the stateful editor (sort, filter, alerts, save checks)

mod collection_editor;
mod options;
mod state;

pub use collection_editor::CollectionEditor;
pub use options::EditorOptions;
pub use state::EditorState;
