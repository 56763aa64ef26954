// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[presentation]` - Default display duration, slide timing and edge
//! - `[diagnostics]` - Event collection toggle and buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `MESSAGE_BAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use message_bar::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.presentation.default_duration_secs = Some(5.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::message::DisplayLocation;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Message presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    /// Display duration used when a request omits one (seconds).
    #[serde(
        default = "default_display_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,

    /// Length of the enter/exit slide (milliseconds).
    #[serde(
        default = "default_animation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_ms: Option<u32>,

    /// Edge used when a request omits one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_location: Option<DisplayLocation>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_display_duration_secs(),
            animation_duration_ms: default_animation_duration_ms(),
            display_location: Some(DisplayLocation::default()),
        }
    }
}

impl PresentationConfig {
    /// Returns the configured default duration, falling back to 3 seconds.
    ///
    /// Negative or non-finite values collapse to zero (no auto-dismiss).
    #[must_use]
    pub fn default_duration(&self) -> f64 {
        let secs = self
            .default_duration_secs
            .unwrap_or(DEFAULT_DISPLAY_DURATION_SECS);
        if secs.is_finite() && secs > 0.0 {
            secs
        } else {
            0.0
        }
    }

    /// Returns the slide duration, clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        let millis = self
            .animation_duration_ms
            .unwrap_or(DEFAULT_ANIMATION_DURATION_MS)
            .clamp(MIN_ANIMATION_DURATION_MS, MAX_ANIMATION_DURATION_MS);
        Duration::from_millis(u64::from(millis))
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Whether presentation events are recorded.
    #[serde(default = "default_diagnostics_enabled")]
    pub enabled: bool,

    /// Number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_diagnostics_enabled(),
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Message presentation settings.
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_display_duration_secs() -> Option<f64> {
    Some(DEFAULT_DISPLAY_DURATION_SECS)
}

fn default_animation_duration_ms() -> Option<u32> {
    Some(DEFAULT_ANIMATION_DURATION_MS)
}

fn default_diagnostics_enabled() -> bool {
    true
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string())),
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
