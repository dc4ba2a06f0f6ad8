// Configuration module for global-notifications
// This module handles loading and parsing configuration from ~/.config/global-notifications/config.toml

mod types;

pub use types::{Config, NotificationConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/global-notifications/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    let config = match toml::from_str::<Config>(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            };
        }
    };

    if let Err(e) = config.validate() {
        log::error!("Config file {:?} rejected: {}", config_path, e);
        return ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config: {}", e)),
        };
    }

    log::debug!(
        "Config parsed successfully: auto_hide_ms={} default_position={}",
        config.notifications.auto_hide_ms,
        config.notifications.default_position
    );
    ConfigResult {
        config,
        warning: None,
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/global-notifications/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("global-notifications")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
