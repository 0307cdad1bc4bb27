//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

use crate::model::DEFAULT_PREVIEW_LINES;
use crate::viewport::wrap::{DEFAULT_CONTENT_PADDING, DEFAULT_TAB_WIDTH};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CCLOGVIEW_CONFIG";

/// Environment variable overriding `center_selected`.
pub const CENTER_SELECTED_ENV: &str = "CCLOGVIEW_CENTER_SELECTED";

/// Rows moved by a page step when not configured.
pub const DEFAULT_PAGE_STEP: usize = 10;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/cclogview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Keep the selected row vertically centered in the session list.
    #[serde(default)]
    pub center_selected: Option<bool>,

    /// Rows moved by page up/down.
    #[serde(default)]
    pub page_step: Option<usize>,

    /// Spaces substituted for a tab.
    #[serde(default)]
    pub tab_width: Option<usize>,

    /// Content lines shown under an expanded row.
    #[serde(default)]
    pub preview_lines: Option<usize>,

    /// Columns of padding around detail text.
    #[serde(default)]
    pub content_padding: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved viewer configuration.
///
/// Created by merging defaults, the config file and env vars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportConfig {
    /// Keep the selected row centered.
    pub center_selected: bool,
    /// Rows moved by page up/down.
    pub page_step: usize,
    /// Spaces substituted for a tab.
    pub tab_width: usize,
    /// Content lines shown under an expanded row.
    pub preview_lines: usize,
    /// Columns of padding around detail text.
    pub content_padding: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            center_selected: true,
            page_step: DEFAULT_PAGE_STEP,
            tab_width: DEFAULT_TAB_WIDTH,
            preview_lines: DEFAULT_PREVIEW_LINES,
            content_padding: DEFAULT_CONTENT_PADDING,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cclogview/cclogview.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cclogview").join("cclogview.log")
    } else {
        PathBuf::from("cclogview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath("empty path".to_string()));
    }

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/cclogview/config.toml` on Linux. `None` if no config
/// directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cclogview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `CCLOGVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/cclogview/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ViewportConfig {
    let defaults = ViewportConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ViewportConfig {
        center_selected: config.center_selected.unwrap_or(defaults.center_selected),
        page_step: config.page_step.unwrap_or(defaults.page_step),
        tab_width: config.tab_width.unwrap_or(defaults.tab_width),
        preview_lines: config.preview_lines.unwrap_or(defaults.preview_lines),
        content_padding: config.content_padding.unwrap_or(defaults.content_padding),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides.
///
/// Checks for:
/// - `CCLOGVIEW_CENTER_SELECTED`: `true`/`false`/`1`/`0`
///
/// Unrecognized values are ignored with a warning.
pub fn apply_env_overrides(mut config: ViewportConfig) -> ViewportConfig {
    if let Ok(value) = std::env::var(CENTER_SELECTED_ENV) {
        match parse_flag(&value) {
            Some(flag) => config.center_selected = flag,
            None => warn!(
                variable = CENTER_SELECTED_ENV,
                value = %value,
                "ignoring unrecognized boolean"
            ),
        }
    }

    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Load, merge and apply env overrides in one go.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<PathBuf>) -> Result<ViewportConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    Ok(apply_env_overrides(merge_config(file)))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
