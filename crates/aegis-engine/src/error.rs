//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and the clock run.

use std::path::PathBuf;

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error in {}: {source}", .path.display())]
    Config {
        /// The file that was being loaded.
        path: PathBuf,
        /// The underlying config error.
        source: aegis_core::config::ConfigError,
    },

    /// Session assembly failed.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: aegis_core::session::SessionError,
    },

    /// The clock runner failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: aegis_core::runner::RunnerError,
    },
}
