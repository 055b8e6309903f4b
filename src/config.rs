//! Configuration management for the HAL bridge
//!
//! This module provides runtime configuration loading from JSON files so the
//! bridge's interface name, write size and log verbosity can be adjusted
//! without recompilation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hal::AUDIO_HARDWARE_INTERFACE;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalConfig {
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

/// Parameters the bridge uses when opening and writing to the device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Interface name requested from the module's open operation
    pub interface: String,
    /// Size in bytes of the zero-filled buffer written per invocation
    pub buffer_size: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            interface: AUDIO_HARDWARE_INTERFACE.to_string(),
            buffer_size: 1024,
        }
    }
}

/// Logging parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Android log tag
    pub tag: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub max_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tag: "AudioHAL".to_string(),
            max_level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed `max_level`, falling back to `DEBUG` for unknown names.
    pub fn level(&self) -> tracing::Level {
        self.max_level
            .parse()
            .unwrap_or(tracing::Level::DEBUG)
    }
}

impl HalConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults if the file doesn't exist
    /// or its JSON is invalid.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Configuration on Android
    ///
    /// The library ships without an asset manager hook, so the defaults apply.
    #[cfg(target_os = "android")]
    pub fn load() -> Self {
        log::info!("[Config] Using default configuration");
        Self::default()
    }

    /// Load configuration for non-Android platforms
    #[cfg(not(target_os = "android"))]
    pub fn load() -> Self {
        Self::load_from_file("assets/hal_config.json")
    }
}
