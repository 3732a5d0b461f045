// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (CLI `--config-dir`, tests)
//! 2. **Environment variable** (`ICED_PORTAL_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedPortal";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_PORTAL_CONFIG_DIR";

/// Returns the application config directory path.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring the explicit override, then the
/// environment variable, then the platform default.
#[must_use]
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|base| base.join(APP_NAME))
}
