//! User-facing alert banners.
//!
//! At most one alert is active at a time. A new alert replaces the previous
//! one; alerts go away only when the user dismisses them.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Success,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == AlertSeverity::Warning
    }
}

/// Holds the single active alert.
#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
}

impl AlertSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `alert`, replacing whatever was active.
    pub fn raise(&mut self, alert: Alert) {
        match alert.severity {
            AlertSeverity::Warning => tracing::warn!("[Alert] {}", alert.message),
            AlertSeverity::Success => tracing::info!("[Alert] {}", alert.message),
        }
        self.current = Some(alert);
    }

    /// Removes the active alert, returning it.
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}
