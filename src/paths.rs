//! Centralized path definitions
//!
//! ```text
//! ~/.config/attendance/
//! └── config.toml               # Default configuration file
//! ```
//!
//! Upload and database locations come from the configuration itself.

use std::path::PathBuf;

/// Application directory name under the user config directory
pub const APP_DIR: &str = "attendance";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Directory holding the default configuration file
///
/// Falls back to the current directory when the platform has no config dir.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the default configuration file
#[must_use]
pub fn default_config() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
