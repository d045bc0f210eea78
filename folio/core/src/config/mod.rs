//! TOML Configuration File Support
//!
//! Tunables for the widgets and the surface, read from
//! `$XDG_CONFIG_HOME/sysfolio/folio.toml`.
//!
//! # Configuration Priority
//!
//! Highest first:
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables (`FOLIO_*`)
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [typewriter]
//! char_interval_ms = 18
//!
//! [carousel]
//! interval_ms = 4000
//! crossfade_ms = 700
//! seed = 42
//!
//! [display]
//! fps = 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carousel::{DEFAULT_CROSSFADE, DEFAULT_INTERVAL};
use crate::typewriter::DEFAULT_CHAR_INTERVAL;

/// Default target frame rate of the terminal surface
pub const DEFAULT_FPS: u32 = 30;

/// Highest accepted frame rate
pub const MAX_FPS: u32 = 120;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where the winning configuration layer came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[typewriter]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterToml {
    /// Delay between revealed characters in milliseconds
    pub char_interval_ms: Option<u64>,
}

/// `[carousel]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselToml {
    /// Auto-advance interval in milliseconds
    pub interval_ms: Option<u64>,

    /// Crossfade length in milliseconds (0 disables the fade)
    pub crossfade_ms: Option<u64>,

    /// Shuffle seed; unset means a fresh order every run
    pub seed: Option<u64>,
}

/// `[display]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// Target frames per second
    pub fps: Option<u32>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioToml {
    /// Typewriter section
    pub typewriter: TypewriterToml,

    /// Carousel section
    pub carousel: CarouselToml,

    /// Display section
    pub display: DisplayToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration
///
/// Use [`load_config`] to build one with proper priority handling, then
/// [`ConfigOverrides::apply`] for CLI flags and [`FolioConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolioConfig {
    /// Typewriter character interval
    pub char_interval: Duration,

    /// Carousel auto-advance interval
    pub carousel_interval: Duration,

    /// Carousel crossfade length
    pub crossfade: Duration,

    /// Shuffle seed (`None` = entropy)
    pub seed: Option<u64>,

    /// Target frames per second
    pub fps: u32,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    source: ConfigSource,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            char_interval: DEFAULT_CHAR_INTERVAL,
            carousel_interval: DEFAULT_INTERVAL,
            crossfade: DEFAULT_CROSSFADE,
            seed: None,
            fps: DEFAULT_FPS,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl FolioConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest-priority layer that contributed a value
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Length of one frame
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Reject values the widgets cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero character or
    /// carousel interval, or a frame rate outside `1..=120`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.char_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "typewriter.char_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.carousel_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "carousel.interval_ms must be greater than 0".to_string(),
            ));
        }
        if !(1..=MAX_FPS).contains(&self.fps) {
            return Err(ConfigError::ValidationError(format!(
                "display.fps must be between 1 and {}, got {}",
                MAX_FPS, self.fps
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/sysfolio/folio.toml` or
/// `~/.config/sysfolio/folio.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysfolio").join("folio.toml"))
}

/// Get the default log file path
///
/// The terminal surface owns stdout and stderr while it runs, so logs go to
/// `$XDG_CACHE_HOME/sysfolio/sysfolio.log` unless a path is given.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("sysfolio").join("sysfolio.log"))
}

/// The log file to write: `explicit` if given, else [`default_log_path`]
#[must_use]
pub fn resolve_log_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(default_log_path)
}

/// Load configuration from the default path and the process environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
/// A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path and the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<FolioConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit environment lookup
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<FolioConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = FolioConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: FolioToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);

    Ok(config)
}

fn apply_toml_config(config: &mut FolioConfig, toml: &FolioToml) {
    if let Some(ms) = toml.typewriter.char_interval_ms {
        config.char_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.carousel.interval_ms {
        config.carousel_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.carousel.crossfade_ms {
        config.crossfade = Duration::from_millis(ms);
    }
    if toml.carousel.seed.is_some() {
        config.seed = toml.carousel.seed;
    }
    if let Some(fps) = toml.display.fps {
        config.fps = fps;
    }
}

fn apply_env_config<F>(config: &mut FolioConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let parsed = |key: &str| -> Option<u64> {
        let raw = env(key)?;
        match raw.trim().parse::<u64>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring non-numeric environment override");
                None
            }
        }
    };

    if let Some(ms) = parsed("FOLIO_CHAR_INTERVAL_MS") {
        config.char_interval = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parsed("FOLIO_CAROUSEL_INTERVAL_MS") {
        config.carousel_interval = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parsed("FOLIO_CROSSFADE_MS") {
        config.crossfade = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(seed) = parsed("FOLIO_SEED") {
        config.seed = Some(seed);
        config.source = ConfigSource::Env;
    }
    if let Some(fps) = parsed("FOLIO_FPS") {
        config.fps = u32::try_from(fps).unwrap_or(u32::MAX);
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Character interval override (milliseconds)
    pub char_interval_ms: Option<u64>,
    /// Carousel interval override (milliseconds)
    pub interval_ms: Option<u64>,
    /// Crossfade override (milliseconds)
    pub crossfade_ms: Option<u64>,
    /// Shuffle seed override
    pub seed: Option<u64>,
    /// Frame rate override
    pub fps: Option<u32>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set character interval override
    #[must_use]
    pub fn with_char_interval_ms(mut self, ms: u64) -> Self {
        self.char_interval_ms = Some(ms);
        self
    }

    /// Set carousel interval override
    #[must_use]
    pub fn with_interval_ms(mut self, ms: u64) -> Self {
        self.interval_ms = Some(ms);
        self
    }

    /// Set crossfade override
    #[must_use]
    pub fn with_crossfade_ms(mut self, ms: u64) -> Self {
        self.crossfade_ms = Some(ms);
        self
    }

    /// Set shuffle seed override
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set frame rate override
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    fn is_empty(&self) -> bool {
        self.char_interval_ms.is_none()
            && self.interval_ms.is_none()
            && self.crossfade_ms.is_none()
            && self.seed.is_none()
            && self.fps.is_none()
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut FolioConfig) {
        if self.is_empty() {
            return;
        }
        config.source = ConfigSource::Cli;

        if let Some(ms) = self.char_interval_ms {
            config.char_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.interval_ms {
            config.carousel_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.crossfade_ms {
            config.crossfade = Duration::from_millis(ms);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    fn write_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.char_interval, Duration::from_millis(18));
        assert_eq!(config.carousel_interval, Duration::from_millis(4000));
        assert_eq!(config.crossfade, Duration::from_millis(700));
        assert_eq!(config.seed, None);
        assert_eq!(config.fps, 30);
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/folio-debug.log");
        assert_eq!(resolve_log_path(Some(explicit.clone())), Some(explicit));
        assert_eq!(resolve_log_path(None), default_log_path());
        if let Some(p) = default_log_path() {
            assert!(p.ends_with("sysfolio/sysfolio.log"));
        }
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.to_string_lossy().contains("sysfolio"));
            assert!(p.to_string_lossy().ends_with("folio.toml"));
        }
    }

    #[test]
    fn test_frame_duration() {
        let config = FolioConfig {
            fps: 50,
            ..FolioConfig::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(20));
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let file = write_toml(
            r#"
[typewriter]
char_interval_ms = 25

[carousel]
interval_ms = 6000
crossfade_ms = 0
seed = 7

[display]
fps = 60
"#,
        );

        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.char_interval, Duration::from_millis(25));
        assert_eq!(config.carousel_interval, Duration::from_millis(6000));
        assert_eq!(config.crossfade, Duration::ZERO);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fps, 60);
        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let file = write_toml("[carousel]\nseed = 3\n");
        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.seed, Some(3));
        assert_eq!(config.carousel_interval, DEFAULT_INTERVAL);
        assert_eq!(config.fps, DEFAULT_FPS);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_toml("[carousel\ninterval_ms = ");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let file = write_toml("[display]\nfps = \"fast\"\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = load_config_with_env(Some(path), no_env).unwrap();

        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_directory_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_with_env(Some(dir.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    // =========================================================================
    // Priority Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let file = write_toml("[carousel]\ninterval_ms = 6000\nseed = 1\n");
        let env = env_of(&[("FOLIO_CAROUSEL_INTERVAL_MS", "2500"), ("FOLIO_FPS", "24")]);

        let config = load_config_with_env(Some(file.path().to_path_buf()), env).unwrap();

        assert_eq!(config.carousel_interval, Duration::from_millis(2500));
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.fps, 24);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_non_numeric_env_is_ignored() {
        let env = env_of(&[("FOLIO_SEED", "banana")]);
        let config = load_config_with_env(None, env).unwrap();

        assert_eq!(config.seed, None);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = env_of(&[("FOLIO_SEED", "11"), ("FOLIO_CHAR_INTERVAL_MS", "30")]);
        let mut config = load_config_with_env(None, env).unwrap();

        ConfigOverrides::new().with_seed(99).apply(&mut config);

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.char_interval, Duration::from_millis(30));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    // =========================================================================
    // ConfigOverrides Tests
    // =========================================================================

    #[test]
    fn test_config_overrides_builder() {
        let overrides = ConfigOverrides::new()
            .with_char_interval_ms(10)
            .with_interval_ms(1000)
            .with_crossfade_ms(300)
            .with_seed(5)
            .with_fps(15);

        assert_eq!(overrides.char_interval_ms, Some(10));
        assert_eq!(overrides.interval_ms, Some(1000));
        assert_eq!(overrides.crossfade_ms, Some(300));
        assert_eq!(overrides.seed, Some(5));
        assert_eq!(overrides.fps, Some(15));
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = FolioConfig::default();
        ConfigOverrides::new().apply(&mut config);
        assert_eq!(config, FolioConfig::default());
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_zero_intervals_rejected() {
        let mut config = FolioConfig::default();
        ConfigOverrides::new().with_interval_ms(0).apply(&mut config);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = FolioConfig::default();
        ConfigOverrides::new().with_char_interval_ms(0).apply(&mut config);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_fps_bounds() {
        for (fps, ok) in [(0, false), (1, true), (120, true), (121, false)] {
            let config = FolioConfig {
                fps,
                ..FolioConfig::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "fps = {}", fps);
        }
    }

    // =========================================================================
    // ConfigSource / Error Tests
    // =========================================================================

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Cli), "CLI");
        assert_eq!(format!("{}", ConfigSource::Env), "environment");
        assert_eq!(format!("{}", ConfigSource::File), "config file");
        assert_eq!(format!("{}", ConfigSource::Default), "default");
    }

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::ReadError {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{}", read_err);
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("Failed to read"));

        let msg = format!("{}", ConfigError::ValidationError("fps out of range".to_string()));
        assert!(msg.contains("fps out of range"));
    }
}
