// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[profile]` - Display name and email shown in the shell header
//! - `[ops]` - Transfer delay for the ops screen
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_PORTAL_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_portal::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning key)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced as a toast when the config file exists but cannot be
/// read or parsed.
const LOAD_WARNING_KEY: &str = "config-load-warning";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Identity displayed in the shell header. Purely cosmetic; there is no
/// authentication behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Ops screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpsConfig {
    /// Delay before a started transfer completes, in milliseconds.
    #[serde(
        default = "default_transfer_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_delay_ms: Option<u64>,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            transfer_delay_ms: default_transfer_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Header identity.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Ops screen settings.
    #[serde(default)]
    pub ops: OpsConfig,
}

/// Resolved header identity with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Config {
    /// The header identity, falling back to the seed profile.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            name: self
                .profile
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
            email: self
                .profile
                .email
                .clone()
                .unwrap_or_else(|| DEFAULT_PROFILE_EMAIL.to_string()),
        }
    }

    /// The transfer delay, clamped to the supported range so a hand-edited
    /// config cannot request a nonsensical delay.
    #[must_use]
    pub fn transfer_delay(&self) -> Duration {
        let ms = self
            .ops
            .transfer_delay_ms
            .unwrap_or(DEFAULT_TRANSFER_DELAY_MS)
            .clamp(MIN_TRANSFER_DELAY_MS, MAX_TRANSFER_DELAY_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_transfer_delay_ms() -> Option<u64> {
    Some(DEFAULT_TRANSFER_DELAY_MS)
}

/// Tolerant theme-mode deserializer: an unknown value falls back to the
/// default instead of rejecting the whole file.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        "light" => ThemeMode::Light,
        "dark" => ThemeMode::Dark,
        _ => ThemeMode::default(),
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the config plus an optional warning key to surface to the user
/// when an existing file could not be read or parsed (the defaults are used
/// in that case).
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration, resolving the directory through
/// [`paths::config_dir_with_override`].
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(dir) = paths::config_dir_with_override(base_dir) else {
        return (Config::default(), None);
    };
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some(LOAD_WARNING_KEY.to_string())),
    }
}

/// Loads the configuration from an explicit path, failing on any I/O or
/// parse error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration, resolving the directory through
/// [`paths::config_dir_with_override`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let Some(dir) = paths::config_dir_with_override(base_dir) else {
        return Ok(());
    };
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path, creating parent directories
/// as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
