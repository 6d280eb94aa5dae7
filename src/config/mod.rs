// SPDX-License-Identifier: MPL-2.0
//! This module handles the admin panel configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Initial theme mode
//! - `[api]` - Backend location
//! - `[notifications]` - Toast animation timing
//! - `[drafts]` - Draft auto-save delay
//! - `[search]` - Global search debounce
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `LIBRARY_ADMIN_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use library_admin::config;
//!
//! let (mut config, _warning) = config::load();
//! config.api.base_url = "https://library.example.org/".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Theme used when the persisted store holds no explicit choice.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Exit animation length in milliseconds.
    #[serde(
        default = "default_exit_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_animation_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            exit_animation_ms: default_exit_animation_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Returns the exit animation length, clamped to the supported range.
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        let ms = self
            .exit_animation_ms
            .unwrap_or(DEFAULT_TOAST_EXIT_ANIMATION_MS)
            .clamp(MIN_TOAST_EXIT_ANIMATION_MS, MAX_TOAST_EXIT_ANIMATION_MS);
        Duration::from_millis(ms)
    }
}

/// Form draft settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftsConfig {
    /// Quiet period before a draft is written, in milliseconds.
    #[serde(
        default = "default_autosave_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autosave_delay_ms: Option<u64>,
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: default_autosave_delay_ms(),
        }
    }
}

impl DraftsConfig {
    /// Returns the auto-save delay, clamped to the supported range.
    #[must_use]
    pub fn autosave_delay(&self) -> Duration {
        let ms = self
            .autosave_delay_ms
            .unwrap_or(DEFAULT_DRAFT_AUTOSAVE_MS)
            .clamp(MIN_DRAFT_AUTOSAVE_MS, MAX_DRAFT_AUTOSAVE_MS);
        Duration::from_millis(ms)
    }
}

/// Global search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Quiet period before a live search runs, in milliseconds.
    #[serde(default = "default_search_delay_ms")]
    pub delay_ms: u64,

    /// Queries shorter than this are ignored.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SEARCH_DELAY_MS,
            min_query_len: DEFAULT_SEARCH_MIN_QUERY_LEN,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Admin panel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub drafts: DraftsConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_EXIT_ANIMATION_MS)
}

fn default_autosave_delay_ms() -> Option<u64> {
    Some(DEFAULT_DRAFT_AUTOSAVE_MS)
}

fn default_search_delay_ms() -> u64 {
    DEFAULT_SEARCH_DELAY_MS
}

fn default_min_query_len() -> usize {
    DEFAULT_SEARCH_MIN_QUERY_LEN
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {}", raw)))
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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            config.notifications.exit_animation(),
            Duration::from_millis(400)
        );
        assert_eq!(config.drafts.autosave_delay(), Duration::from_millis(2000));
        assert_eq!(config.search.delay_ms, 500);
        assert_eq!(config.search.min_query_len, 2);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: "https://library.example.org/".to_string(),
            },
            notifications: NotificationsConfig {
                exit_animation_ms: Some(250),
            },
            drafts: DraftsConfig {
                autosave_delay_ms: Some(1500),
            },
            search: SearchConfig {
                delay_ms: 300,
                min_query_len: 3,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"LIGHT\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.api, ApiConfig::default());
        assert_eq!(loaded.search, SearchConfig::default());
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn out_of_range_timings_are_clamped() {
        let notifications = NotificationsConfig {
            exit_animation_ms: Some(60_000),
        };
        assert_eq!(
            notifications.exit_animation(),
            Duration::from_millis(MAX_TOAST_EXIT_ANIMATION_MS)
        );

        let drafts = DraftsConfig {
            autosave_delay_ms: Some(1),
        };
        assert_eq!(
            drafts.autosave_delay(),
            Duration::from_millis(MIN_DRAFT_AUTOSAVE_MS)
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[broken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(nested.clone())).expect("save");
        assert!(nested.join(CONFIG_FILE).exists());
    }
}
