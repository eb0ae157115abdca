//! Service configuration
//!
//! Loaded from a TOML file (explicit path, or `~/.config/attendance/config.toml`
//! when present), then overridden by `ATTENDANCE_*` environment variables.
//! Every field has a default, so an empty file is a valid configuration.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::adapters::file::UploadPolicy;
use crate::core::services::VerificationPolicy;
use crate::paths;

/// Environment variable names for overrides
pub mod env {
    /// Upload root directory
    pub const UPLOAD_PATH: &str = "ATTENDANCE_UPLOAD_PATH";
    /// Public URL prefix for stored photos
    pub const UPLOAD_PREFIX: &str = "ATTENDANCE_UPLOAD_PREFIX";
    /// Largest accepted upload, in bytes
    pub const MAX_UPLOAD_SIZE: &str = "ATTENDANCE_MAX_UPLOAD_SIZE";
    /// Comma separated extension allow-list
    pub const ALLOWED_EXTENSIONS: &str = "ATTENDANCE_ALLOWED_EXTENSIONS";
    /// Largest accepted GPS accuracy, in meters
    pub const MAX_GPS_ACCURACY: &str = "ATTENDANCE_MAX_GPS_ACCURACY";
    /// Largest accepted claimed/photo position gap, in meters
    pub const MAX_DISTANCE_DIFFERENCE: &str = "ATTENDANCE_MAX_DISTANCE_DIFFERENCE";
    /// SQLite database file
    pub const DATABASE_PATH: &str = "ATTENDANCE_DATABASE_PATH";
    /// Default number of records in a history listing
    pub const HISTORY_LIMIT: &str = "ATTENDANCE_HISTORY_LIMIT";
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Photo upload settings
    #[serde(default)]
    pub upload: UploadConfig,
    /// Integrity thresholds
    #[serde(default)]
    pub security: SecurityConfig,
    /// Persistence settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Read path settings
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Photo upload settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory photos are written to
    #[serde(default = "default_upload_root")]
    pub root: PathBuf,
    /// URL prefix photos are served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Largest accepted upload, in bytes
    #[serde(default = "default_max_size")]
    pub max_size: u64,
    /// Accepted extensions (case-insensitive, leading dot optional)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_upload_root() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

const fn default_max_size() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: default_upload_root(),
            public_prefix: default_public_prefix(),
            max_size: default_max_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

/// Integrity thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Largest accepted GPS accuracy radius, in meters
    #[serde(default = "default_max_gps_accuracy")]
    pub max_gps_accuracy: f64,
    /// Largest accepted claimed/photo position gap, in meters
    #[serde(default = "default_max_distance_difference")]
    pub max_distance_difference: f64,
}

const fn default_max_gps_accuracy() -> f64 {
    100.0
}

const fn default_max_distance_difference() -> f64 {
    200.0
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_gps_accuracy: default_max_gps_accuracy(),
            max_distance_difference: default_max_distance_difference(),
        }
    }
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./attendance.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Read path settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Records returned by a history listing
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

const fn default_history_limit() -> usize {
    50
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_history_limit(),
        }
    }
}

impl Config {
    /// Load configuration from `explicit`, or the default location if present
    ///
    /// Environment overrides are applied last, then the result is normalized
    /// and validated.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = paths::default_config();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(env::UPLOAD_PATH) {
            self.upload.root = PathBuf::from(root);
        }
        if let Some(prefix) = lookup(env::UPLOAD_PREFIX) {
            self.upload.public_prefix = prefix;
        }
        if let Some(size) = parse_var(&lookup, env::MAX_UPLOAD_SIZE)? {
            self.upload.max_size = size;
        }
        if let Some(list) = lookup(env::ALLOWED_EXTENSIONS) {
            self.upload.allowed_extensions = list.split(',').map(String::from).collect();
        }
        if let Some(accuracy) = parse_var(&lookup, env::MAX_GPS_ACCURACY)? {
            self.security.max_gps_accuracy = accuracy;
        }
        if let Some(distance) = parse_var(&lookup, env::MAX_DISTANCE_DIFFERENCE)? {
            self.security.max_distance_difference = distance;
        }
        if let Some(path) = lookup(env::DATABASE_PATH) {
            self.database.path = PathBuf::from(path);
        }
        if let Some(limit) = parse_var(&lookup, env::HISTORY_LIMIT)? {
            self.history.limit = limit;
        }
        Ok(())
    }

    /// Lower-case extensions, strip leading dots, drop blanks and duplicates
    pub fn normalize(&mut self) {
        let mut normalized: Vec<String> = Vec::new();
        for ext in &self.upload.allowed_extensions {
            let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        self.upload.allowed_extensions = normalized;
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.security.max_gps_accuracy.is_finite() && self.security.max_gps_accuracy > 0.0) {
            bail!(
                "security.max_gps_accuracy must be a positive number of meters, got {}",
                self.security.max_gps_accuracy
            );
        }
        if !(self.security.max_distance_difference.is_finite()
            && self.security.max_distance_difference > 0.0)
        {
            bail!(
                "security.max_distance_difference must be a positive number of meters, got {}",
                self.security.max_distance_difference
            );
        }
        if self.upload.max_size == 0 {
            bail!("upload.max_size must be greater than zero");
        }
        if self.upload.allowed_extensions.is_empty() {
            bail!("upload.allowed_extensions must list at least one extension");
        }
        if self.history.limit == 0 {
            bail!("history.limit must be greater than zero");
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Pipeline thresholds
    #[must_use]
    pub const fn verification_policy(&self) -> VerificationPolicy {
        VerificationPolicy {
            max_gps_accuracy: self.security.max_gps_accuracy,
            max_distance_difference: self.security.max_distance_difference,
        }
    }

    /// Photo store policy
    #[must_use]
    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            allowed_extensions: self.upload.allowed_extensions.clone(),
            max_size: self.upload.max_size,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid value for {key} ('{raw}'): {e}"))
        })
        .transpose()
}
