//! Session and Template domain module.

mod model;
pub mod repository;

pub use model::{Collection, CollectionKind, CollectionMember};
pub use repository::CollectionRepository;
