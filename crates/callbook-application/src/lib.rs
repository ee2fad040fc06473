//! Application layer for Callbook.
//!
//! This crate provides use case implementations that coordinate the pure
//! domain state of `callbook-core` with the store traits it defines.

pub mod catalog_service;
pub mod editor_service;
pub mod review_service;
pub mod runner_service;

#[cfg(test)]
mod test_support;

pub use catalog_service::CatalogService;
pub use editor_service::{CollectionEditorService, PopulateSource};
pub use review_service::ReviewService;
pub use runner_service::SessionRunnerService;
