//! Call catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: the `Call` record and store predicates
//! - `repository`: read/upsert access to the catalog
//! - `sort`: pure ordering and filtering of call lists

mod model;
pub mod repository;
pub mod sort;

pub use model::{Call, CallPredicate};
pub use repository::CallRepository;
pub use sort::{SortKey, distinct_groups, filter_calls, sort_calls};
