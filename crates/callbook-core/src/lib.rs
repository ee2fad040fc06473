pub mod alert;
pub mod call;
pub mod collection;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod repository;
pub mod review;
pub mod runner;

// Re-export common error type
pub use error::CallbookError;
