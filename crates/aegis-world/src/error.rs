//! Error types for the `aegis-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type alias.

use std::path::PathBuf;

use aegis_types::{SectorId, SectorIdError};

/// Errors that can occur during sector catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A sector id string failed validation.
    #[error(transparent)]
    InvalidSectorId(#[from] SectorIdError),

    /// A 0--10 level field was given a value above 10.
    #[error("sector {sector}: {field} must be between 0 and 10, got {value}")]
    LevelOutOfRange {
        /// The sector being updated.
        sector: SectorId,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u8,
    },

    /// A population figure was negative or not finite.
    #[error("sector {sector}: population must be a finite non-negative number, got {value}")]
    InvalidPopulation {
        /// The sector being updated.
        sector: SectorId,
        /// The rejected value.
        value: f64,
    },

    /// A city's threat level was above 10.
    #[error("sector {sector}: city {city} threat_level must be between 0 and 10, got {value}")]
    CityLevelOutOfRange {
        /// The sector being updated.
        sector: SectorId,
        /// Name of the offending city.
        city: String,
        /// The rejected value.
        value: u8,
    },

    /// A city's population was negative or not finite.
    #[error("sector {sector}: city {city} population must be a finite non-negative number, got {value}")]
    CityInvalidPopulation {
        /// The sector being updated.
        sector: SectorId,
        /// Name of the offending city.
        city: String,
        /// The rejected value.
        value: f64,
    },

    /// The sector overrides file could not be read.
    #[error("failed to read sector overrides from {}: {}", .path.display(), .source)]
    OverridesRead {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The sector overrides document is not valid YAML for a patch map.
    #[error("failed to parse sector overrides: {0}")]
    OverridesParse(#[from] serde_yml::Error),
}
