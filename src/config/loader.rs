//! Configuration file loading with precedence handling.

use crate::rotation::{Breakpoints, RotationConfig, ViewPolicy};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "CAMPUSBOARD_CONFIG";
/// Environment variable overriding the selected institution.
pub const ENV_INSTITUTION: &str = "CAMPUSBOARD_INSTITUTION";
/// Environment variable overriding the content directory.
pub const ENV_CONTENT_DIR: &str = "CAMPUSBOARD_CONTENT_DIR";

/// Rows shown at once by the quick-updates ticker.
pub const TICKER_ROWS: usize = 3;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/campusboard/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Institution code shown on start.
    #[serde(default)]
    pub institution: Option<String>,

    /// Root of the content directory (`institutions.toml` + per-code JSON).
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// JSON-lines file receiving admission applications.
    #[serde(default)]
    pub applications_file: Option<PathBuf>,

    /// Auto-advance interval of the carousels and ticker, in milliseconds.
    #[serde(default)]
    pub rotation_interval_ms: Option<u64>,

    /// Carousel transition settle delay, in milliseconds.
    #[serde(default)]
    pub transition_settle_ms: Option<u64>,

    /// Marquee scroll step, in milliseconds.
    #[serde(default)]
    pub marquee_step_ms: Option<u64>,

    /// Viewport units per terminal column.
    #[serde(default)]
    pub cell_width: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Institution code, `None` for the registry's first entry.
    pub institution: Option<String>,
    /// Content root.
    pub content_dir: PathBuf,
    /// Application sink file.
    pub applications_file: PathBuf,
    /// Carousel and ticker interval.
    pub rotation_interval: Duration,
    /// Carousel settle delay.
    pub transition_settle: Duration,
    /// Marquee step.
    pub marquee_step: Duration,
    /// Viewport units per column.
    pub cell_width: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Start with every surface paused.
    pub start_paused: bool,
    /// Render with colours.
    pub color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            institution: None,
            content_dir: PathBuf::from("content"),
            applications_file: default_applications_path(),
            rotation_interval: Duration::from_secs(5),
            transition_settle: Duration::from_millis(500),
            marquee_step: Duration::from_millis(150),
            cell_width: 8,
            log_file_path: default_log_path(),
            start_paused: false,
            color: true,
        }
    }
}

/// Rotation parameters for each board surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfigs {
    /// Single-image carousel.
    pub images: RotationConfig,
    /// Responsive news carousel.
    pub news: RotationConfig,
    /// Vertical quick-updates ticker.
    pub updates: RotationConfig,
    /// Horizontal marquee.
    pub marquee: RotationConfig,
}

impl ResolvedConfig {
    /// Build the per-surface rotation configs from the resolved durations.
    pub fn surface_configs(&self) -> SurfaceConfigs {
        SurfaceConfigs {
            images: RotationConfig::single_item()
                .with_interval(self.rotation_interval)
                .with_settle(self.transition_settle),
            news: RotationConfig::sliding_window(ViewPolicy::Responsive(Breakpoints::default()))
                .with_interval(self.rotation_interval)
                .with_settle(self.transition_settle),
            updates: RotationConfig::sliding_window(ViewPolicy::Fixed(TICKER_ROWS))
                .with_interval(self.rotation_interval)
                .with_settle(Duration::ZERO),
            marquee: RotationConfig::single_item()
                .with_interval(self.marquee_step)
                .with_settle(Duration::ZERO),
        }
    }
}

fn state_dir_path(file_name: &str) -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("campusboard").join(file_name)
    } else {
        // Fallback to current directory
        PathBuf::from(file_name)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/campusboard/campusboard.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    state_dir_path("campusboard.log")
}

/// Resolve default applications file path, next to the log file.
pub fn default_applications_path() -> PathBuf {
    state_dir_path("applications.jsonl")
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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
/// Returns `~/.config/campusboard/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("campusboard").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CAMPUSBOARD_CONFIG` environment variable
/// 3. Default path `~/.config/campusboard/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{ENV_CONFIG} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CAMPUSBOARD_INSTITUTION`: Override institution
/// - `CAMPUSBOARD_CONTENT_DIR`: Override content root
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(code) = std::env::var(ENV_INSTITUTION) {
        config.institution = Some(code);
    }

    if let Ok(dir) = std::env::var(ENV_CONTENT_DIR) {
        config.content_dir = PathBuf::from(dir);
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        institution: config.institution.or(defaults.institution),
        content_dir: config.content_dir.unwrap_or(defaults.content_dir),
        applications_file: config
            .applications_file
            .unwrap_or(defaults.applications_file),
        rotation_interval: config
            .rotation_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.rotation_interval),
        transition_settle: config
            .transition_settle_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.transition_settle),
        marquee_step: config
            .marquee_step_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.marquee_step),
        cell_width: config
            .cell_width
            .map(|w| w.max(1))
            .unwrap_or(defaults.cell_width),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        start_paused: defaults.start_paused,
        color: defaults.color,
    }
}

/// Command-line overrides. `None`/`false` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--institution`
    pub institution: Option<String>,
    /// `--content-dir`
    pub content_dir: Option<PathBuf>,
    /// `--paused`
    pub paused: bool,
    /// `--no-color`
    pub no_color: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(code) = cli.institution {
        config.institution = Some(code);
    }

    if let Some(dir) = cli.content_dir {
        config.content_dir = dir;
    }

    if cli.paused {
        config.start_paused = true;
    }

    if cli.no_color {
        config.color = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
