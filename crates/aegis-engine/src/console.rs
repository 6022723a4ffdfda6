//! Line-based operator console on stdin.
//!
//! Clock intents are forwarded to the runner as [`ClockCommand`]s; sector
//! and travel queries read the shared session directly.
//!
//! ```text
//! p | pause          toggle pause
//! s | speed          cycle speed 1 -> 2 -> 4
//! q | quit | stop    end the run
//! t | status         log the clock snapshot
//! sector F15         log the sector record
//! travel E14 F14     log the fastest method and its time
//! ```

use aegis_core::runner::ClockCommand;
use aegis_core::session::SharedSession;
use aegis_types::SectorId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Forward to the clock runner.
    Clock(ClockCommand),
    /// Log the current clock snapshot.
    Status,
    /// Log the record of one sector.
    Sector(SectorId),
    /// Log the fastest way between two sectors.
    Travel {
        /// Origin sector.
        from: SectorId,
        /// Destination sector.
        to: SectorId,
    },
    /// Log the command list.
    Help,
    /// Anything that did not parse.
    Unknown(String),
}

/// Parse one line. Blank lines give `None`.
pub fn parse_line(line: &str) -> Option<ConsoleInput> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let input = match (verb.as_str(), args.as_slice()) {
        ("p" | "pause", []) => ConsoleInput::Clock(ClockCommand::TogglePause),
        ("s" | "speed", []) => ConsoleInput::Clock(ClockCommand::CycleSpeed),
        ("q" | "quit" | "stop", []) => ConsoleInput::Clock(ClockCommand::Stop),
        ("t" | "status", []) => ConsoleInput::Status,
        ("h" | "help" | "?", []) => ConsoleInput::Help,
        ("sector", [id]) => id
            .parse()
            .map_or_else(|_| unknown(line), ConsoleInput::Sector),
        ("travel", [from, to]) => match (from.parse(), to.parse()) {
            (Ok(from), Ok(to)) => ConsoleInput::Travel { from, to },
            _ => unknown(line),
        },
        _ => unknown(line),
    };
    Some(input)
}

fn unknown(line: &str) -> ConsoleInput {
    ConsoleInput::Unknown(line.trim().to_owned())
}

/// Act on one input. Returns `false` once the console should stop reading.
async fn handle(
    session: &SharedSession,
    commands: &mpsc::Sender<ClockCommand>,
    input: ConsoleInput,
) -> bool {
    match input {
        ConsoleInput::Clock(command) => {
            if commands.send(command).await.is_err() {
                debug!("Clock runner gone, closing console");
                return false;
            }
            return command != ClockCommand::Stop;
        }
        ConsoleInput::Status => {
            let snapshot = session.lock().await.clock().snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => info!(snapshot = %json, "Clock status"),
                Err(e) => warn!(error = %e, "failed to serialize clock snapshot"),
            }
        }
        ConsoleInput::Sector(id) => {
            let record = session.lock().await.catalog().get_sector(id);
            match serde_json::to_string(&record) {
                Ok(json) => info!(sector = %id, label = %record.display_label(), record = %json, "Sector"),
                Err(e) => warn!(sector = %id, error = %e, "failed to serialize sector"),
            }
        }
        ConsoleInput::Travel { from, to } => {
            let route = session.lock().await.fastest_route(from, to);
            match route {
                Some((method, hours)) => {
                    info!(%from, %to, method = ?method, hours, "Fastest route");
                }
                None => info!(%from, %to, "No method can reach the destination"),
            }
        }
        ConsoleInput::Help => {
            info!("Commands: pause, speed, quit, status, sector <id>, travel <from> <to>");
        }
        ConsoleInput::Unknown(line) => warn!(input = %line, "Unrecognized console input"),
    }
    true
}

/// Read stdin on a background task until it closes or a stop is sent.
pub fn spawn(session: SharedSession, commands: mpsc::Sender<ClockCommand>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(input) = parse_line(&line) else {
                        continue;
                    };
                    if !handle(&session, &commands, input).await {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("stdin closed, console disabled");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "failed to read console input");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aegis_core::session::{Session, shared};

    use super::*;

    #[test]
    fn parses_clock_commands() {
        assert_eq!(
            parse_line("p"),
            Some(ConsoleInput::Clock(ClockCommand::TogglePause))
        );
        assert_eq!(
            parse_line("  SPEED "),
            Some(ConsoleInput::Clock(ClockCommand::CycleSpeed))
        );
        assert_eq!(
            parse_line("quit"),
            Some(ConsoleInput::Clock(ClockCommand::Stop))
        );
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn parses_sector_queries() {
        let f15: SectorId = "F15".parse().unwrap();
        assert_eq!(parse_line("sector F15"), Some(ConsoleInput::Sector(f15)));

        let e14: SectorId = "E14".parse().unwrap();
        assert_eq!(
            parse_line("travel E14 F15"),
            Some(ConsoleInput::Travel { from: e14, to: f15 })
        );
    }

    #[test]
    fn bad_ids_and_arity_are_unknown() {
        assert!(matches!(parse_line("sector Z99"), Some(ConsoleInput::Unknown(_))));
        assert!(matches!(parse_line("sector"), Some(ConsoleInput::Unknown(_))));
        assert!(matches!(parse_line("travel E14"), Some(ConsoleInput::Unknown(_))));
        assert!(matches!(parse_line("pause now"), Some(ConsoleInput::Unknown(_))));
    }

    #[tokio::test]
    async fn clock_inputs_are_forwarded() {
        let session = shared(Session::new().unwrap());
        let (tx, mut rx) = mpsc::channel(4);

        assert!(handle(&session, &tx, ConsoleInput::Clock(ClockCommand::CycleSpeed)).await);
        assert!(!handle(&session, &tx, ConsoleInput::Clock(ClockCommand::Stop)).await);
        assert_eq!(rx.recv().await, Some(ClockCommand::CycleSpeed));
        assert_eq!(rx.recv().await, Some(ClockCommand::Stop));
    }

    #[tokio::test]
    async fn queries_do_not_touch_the_clock() {
        let session = shared(Session::new().unwrap());
        let (tx, mut rx) = mpsc::channel(4);
        let e14: SectorId = "E14".parse().unwrap();

        assert!(handle(&session, &tx, ConsoleInput::Sector(e14)).await);
        assert!(handle(&session, &tx, ConsoleInput::Status).await);
        drop(tx);
        assert_eq!(rx.recv().await, None);
        assert!(session.lock().await.clock().is_paused());
    }
}
