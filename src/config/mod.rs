// SPDX-License-Identifier: MPL-2.0
//! This module handles the relay's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[locales]` - Resource root, canonical file name, default locale
//! - `[store]` - Persistent locale store location and lookup timeout
//! - `[cache]` - Optional bound on the resolution cache
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LOCALE_RELAY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use locale_relay::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.locales.default_locale = "ru".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LocaleRelay";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOCALE_RELAY_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Locale resource settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalesConfig {
    /// Directory holding the Fluent resources.
    #[serde(default = "default_locales_dir")]
    pub root: PathBuf,

    /// File name expected at `<root>/<locale>/`.
    #[serde(default = "default_canonical_filename")]
    pub canonical_filename: String,

    /// Extension of flat resource files picked up by the bootstrap.
    #[serde(default = "default_resource_extension")]
    pub extension: String,

    /// Locale used when no other tier yields one (e.g., "en").
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            root: default_locales_dir(),
            canonical_filename: default_canonical_filename(),
            extension: default_resource_extension(),
            default_locale: default_locale(),
        }
    }
}

/// Persistent locale store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreConfig {
    /// TOML file mapping user ids to locales. No store when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Deadline for a single lookup, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_timeout_ms: Option<u64>,
}

/// Resolution cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CacheConfig {
    /// Maximum number of users kept. Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_users: Option<usize>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Relay configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Locale resource settings.
    #[serde(default)]
    pub locales: LocalesConfig,

    /// Persistent locale store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Resolution cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Returns the cache bound, raised to [`MIN_CACHE_USERS`] when set lower.
    #[must_use]
    pub fn cache_capacity(&self) -> Option<NonZeroUsize> {
        self.cache
            .max_users
            .and_then(|users| NonZeroUsize::new(users.max(MIN_CACHE_USERS)))
    }

    /// Returns the store lookup timeout, clamped to [`MAX_LOOKUP_TIMEOUT_MS`].
    #[must_use]
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.store
            .lookup_timeout_ms
            .filter(|ms| *ms > 0)
            .map(|ms| Duration::from_millis(ms.min(MAX_LOOKUP_TIMEOUT_MS)))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_locales_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOCALES_DIR)
}

fn default_canonical_filename() -> String {
    DEFAULT_CANONICAL_FILENAME.to_string()
}

fn default_resource_extension() -> String {
    DEFAULT_RESOURCE_EXTENSION.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir.or_else(get_config_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// A file that is not valid TOML yields the default configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Ok(Config::default())
        }
    }
}

/// Loads configuration from a path the user named explicitly.
///
/// Unlike [`load_from_path`], a file that is not valid TOML is an error.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it cannot be parsed.
pub fn load_required(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_config_path_with_override(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
