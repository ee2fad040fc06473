//! Call usage history domain module.

mod model;
pub mod repository;

pub use model::History;
pub use repository::HistoryRepository;
