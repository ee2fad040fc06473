//! Subcommand handlers.
//!
//! Each handler returns `Ok(true)` when the command did what was asked and
//! `Ok(false)` when it stopped on a warning alert. Store failures bubble up as
//! errors and are shown by `main` as a warning.

pub mod build;
pub mod catalog;
pub mod collections;
pub mod review;
pub mod run;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use callbook_core::alert::{Alert, AlertSeverity};
use callbook_core::call::Call;
use callbook_core::config::CallbookConfig;
use callbook_infrastructure::TomlCallStore;

/// Everything a handler needs: the loaded config and the open store.
pub struct AppContext {
    pub config: CallbookConfig,
    pub store: Arc<TomlCallStore>,
}

impl AppContext {
    /// Opens the store in `data_dir`, falling back to the configured
    /// directory and then the platform default.
    pub fn new(config: CallbookConfig, data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.or_else(|| config.data_dir.clone());
        let store = Arc::new(TomlCallStore::new(data_dir.as_deref())?);
        Ok(Self { config, store })
    }
}

pub fn print_alert(alert: Option<&Alert>) {
    let Some(alert) = alert else {
        return;
    };
    match alert.severity {
        AlertSeverity::Success => println!("✓ {}", alert.message),
        AlertSeverity::Warning => eprintln!("! {}", alert.message),
    }
}

pub fn print_calls(calls: &[Call]) {
    if calls.is_empty() {
        println!("(no calls)");
        return;
    }
    for call in calls {
        let last_used = call
            .last_used
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<28} {:<12} {:<6} {:>4}  {}",
            call.name, call.group, call.plus_or_basic, call.num_uses, last_used
        );
    }
}
