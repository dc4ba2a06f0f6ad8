// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

use crate::notification::{DEFAULT_AUTO_HIDE_DELAY, NotificationPosition};

/// Notification configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
    #[serde(default)]
    pub default_position: NotificationPosition,
}

fn default_auto_hide_ms() -> u64 {
    DEFAULT_AUTO_HIDE_DELAY.as_millis() as u64
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            auto_hide_ms: default_auto_hide_ms(),
            default_position: NotificationPosition::Top,
        }
    }
}

impl NotificationConfig {
    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl Config {
    /// Check values serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.notifications.auto_hide_ms == 0 {
            return Err("notifications.auto_hide_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
