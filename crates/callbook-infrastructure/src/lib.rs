pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod toml_store;

pub use crate::config_service::ConfigService;
pub use crate::toml_store::TomlCallStore;
