//! Configuration loading and typed config structures for the Aegis map core.
//!
//! The canonical configuration lives in `aegis-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure and provides a loader that reads and validates the file.
//! Every field has a default, so an empty document is a valid config.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::clock::{ClockSpeed, DAYS_PER_YEAR};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `aegis-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// World-level settings.
    pub world: WorldConfig,

    /// Starting time and pacing of the world clock.
    pub clock: ClockConfig,

    /// Travel planner settings.
    pub travel: TravelConfig,

    /// Sector catalog seeding.
    pub catalog: CatalogConfig,

    /// Run boundary parameters.
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every range constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let clock = &self.clock;
        if clock.start_year == 0 {
            return Err(invalid("clock.start_year must be at least 1"));
        }
        if clock.start_day == 0 || clock.start_day > DAYS_PER_YEAR {
            return Err(invalid(format!(
                "clock.start_day must be between 1 and {DAYS_PER_YEAR}, got {}",
                clock.start_day
            )));
        }
        if clock.start_hour >= 24 {
            return Err(invalid(format!(
                "clock.start_hour must be below 24, got {}",
                clock.start_hour
            )));
        }
        if ClockSpeed::try_from(clock.speed).is_err() {
            return Err(invalid(format!(
                "clock.speed must be 1, 2 or 4, got {}",
                clock.speed
            )));
        }
        if clock.tick_interval_ms == 0 {
            return Err(invalid("clock.tick_interval_ms must be at least 1"));
        }
        let speed = self.travel.default_base_speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(invalid(format!(
                "travel.default_base_speed_kmh must be positive, got {speed}"
            )));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.into(),
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable name of the campaign world.
    #[serde(default = "default_world_name")]
    pub name: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
        }
    }
}

/// World clock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Year the clock starts in (1-based).
    #[serde(default = "default_start_year")]
    pub start_year: u32,

    /// Day of year the clock starts on (1-365).
    #[serde(default = "default_start_day")]
    pub start_day: u16,

    /// Hour of day the clock starts at (0-23).
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,

    /// Whether the clock starts paused.
    #[serde(default = "default_true")]
    pub start_paused: bool,

    /// Initial speed multiplier (1, 2 or 4).
    #[serde(default = "default_speed")]
    pub speed: u8,

    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            start_day: default_start_day(),
            start_hour: default_start_hour(),
            start_paused: true,
            speed: default_speed(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Travel planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TravelConfig {
    /// Base speed in km/h before terrain and ground modifiers.
    #[serde(default = "default_base_speed_kmh")]
    pub default_base_speed_kmh: f64,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            default_base_speed_kmh: default_base_speed_kmh(),
        }
    }
}

/// Sector catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Seed the curated named sectors into the catalog.
    #[serde(default = "default_true")]
    pub seed_curated: bool,

    /// Optional YAML file of extra sector overrides, merged after seeding.
    #[serde(default)]
    pub overrides_file: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_curated: true,
            overrides_file: None,
        }
    }
}

/// Run boundary parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of ticks before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Aegis".to_owned()
}

const fn default_start_year() -> u32 {
    1
}

const fn default_start_day() -> u16 {
    1
}

const fn default_start_hour() -> u8 {
    8
}

const fn default_speed() -> u8 {
    1
}

const fn default_tick_interval_ms() -> u64 {
    100
}

const fn default_base_speed_kmh() -> f64 {
    100.0
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}
