//! Repository trait re-exports.
//!
//! Centralised access to every store-facing trait, plus [`CallStore`] for
//! backends that implement all of them at once.

pub use crate::call::CallRepository;
pub use crate::collection::CollectionRepository;
pub use crate::history::HistoryRepository;

/// A single backend serving calls, collections and history.
pub trait CallStore: CallRepository + CollectionRepository + HistoryRepository {}

impl<T> CallStore for T where T: CallRepository + CollectionRepository + HistoryRepository {}
