//! Session binary for the Aegis strategic map.
//!
//! Wires one world clock and one sector catalog into a session, drives the
//! clock at the configured tick interval, and takes operator commands from
//! stdin until the run ends.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `$AEGIS_CONFIG` or `aegis-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the session (clock, curated sectors, overrides file)
//! 4. Start the stdin console and the Ctrl-C handler
//! 5. Run the clock until the tick limit, a stop command or Ctrl-C
//! 6. Log the result

mod console;
mod error;
mod observer_callback;

use std::path::PathBuf;

use aegis_core::config::SimulationConfig;
use aegis_core::runner::{self, ClockCommand, RunBounds};
use aegis_core::session::{self, Session};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::observer_callback::LoggingObserver;

/// Environment variable naming an alternative config file.
const CONFIG_ENV: &str = "AEGIS_CONFIG";

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "aegis-config.yaml";

/// Ticks between JSON clock snapshots in the debug log.
const SNAPSHOT_EVERY_TICKS: u64 = 600;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration, the session or the clock run
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so remember where it
    //    came from and report once the subscriber is installed.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        world_name = %config.world.name,
        source = %source.as_ref().map_or_else(|| "defaults".to_owned(), |p| p.display().to_string()),
        tick_interval_ms = config.clock.tick_interval_ms,
        max_ticks = config.simulation.max_ticks,
        "aegis-engine starting"
    );

    // 3. Build the session.
    let session = session::shared(Session::from_config(&config).map_err(EngineError::from)?);

    // 4. Command channel shared by the console and the Ctrl-C handler.
    let (commands, mut receiver) = mpsc::channel::<ClockCommand>(32);

    let ctrl_c = commands.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, stopping clock");
                if ctrl_c.send(ClockCommand::Stop).await.is_err() {
                    debug!("Clock runner already finished");
                }
            }
            Err(e) => warn!(error = %e, "failed to listen for Ctrl-C"),
        }
    });

    let _console = console::spawn(session.clone(), commands);
    info!("Console ready: pause, speed, quit, status, sector <id>, travel <from> <to>");

    // 5. Run the clock.
    let mut observer = LoggingObserver::new(SNAPSHOT_EVERY_TICKS);
    let result = runner::run_clock(
        &session,
        &mut receiver,
        RunBounds::from_config(&config),
        &mut observer,
    )
    .await
    .map_err(EngineError::from)?;

    // 6. Log results.
    runner::log_run_end(&result);
    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "aegis-engine shutdown complete"
    );

    Ok(())
}

/// Load the configuration file, or defaults when none exists.
///
/// `$AEGIS_CONFIG` must point at an existing file; the default path is
/// optional. Returns the path that was used, if any.
fn load_config() -> Result<(SimulationConfig, Option<PathBuf>), EngineError> {
    let (path, required) = std::env::var_os(CONFIG_ENV).map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |path| (PathBuf::from(path), true),
    );

    if !required && !path.exists() {
        return Ok((SimulationConfig::default(), None));
    }

    match SimulationConfig::from_file(&path) {
        Ok(config) => Ok((config, Some(path))),
        Err(source) => Err(EngineError::Config { path, source }),
    }
}
