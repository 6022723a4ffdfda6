//! Fixed-interval driver for the world clock.
//!
//! [`run_clock`] owns the real-time side of the clock. Every tick interval
//! it locks the shared session and calls [`WorldClock::tick`]; between ticks
//! it applies [`ClockCommand`]s from an mpsc channel. Commands and ticks are
//! handled on the same task, so the clock only ever has one writer.
//!
//! The run ends when:
//!
//! - **Tick limit**: `max_ticks` advancing ticks have run (0 = unlimited)
//! - **Stop**: a [`ClockCommand::Stop`] arrives
//! - **Host gone**: every command sender has been dropped

use std::time::Duration;

use aegis_types::ClockSnapshot;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::clock::{Advance, ClockError, WorldClock};
use crate::config::SimulationConfig;
use crate::session::SharedSession;

/// Errors that can occur during a clock run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The clock refused to advance.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },
}

/// Control intents sent by the host between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    /// Flip between paused and running.
    TogglePause,
    /// Advance the speed 1 -> 2 -> 4 -> 1 (ignored while paused).
    CycleSpeed,
    /// End the run after the current step.
    Stop,
}

/// Why a clock run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// The configured number of advancing ticks ran.
    MaxTicksReached,
    /// A [`ClockCommand::Stop`] was received.
    Stopped,
    /// All command senders were dropped.
    ChannelClosed,
}

/// Outcome of [`run_clock`].
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Why the run ended.
    pub end_reason: RunEndReason,
    /// Ticks that advanced the clock. Paused ticks are not counted.
    pub total_ticks: u64,
    /// Clock state when the run ended.
    pub final_clock: ClockSnapshot,
}

/// Pacing and length of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunBounds {
    /// Real time between ticks.
    pub tick_interval: Duration,
    /// Advancing ticks before the run ends (0 = unlimited).
    pub max_ticks: u64,
}

impl RunBounds {
    /// Bounds from the `clock` and `simulation` config sections.
    pub const fn from_config(config: &SimulationConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.clock.tick_interval_ms),
            max_ticks: config.simulation.max_ticks,
        }
    }

    const fn limit_reached(&self, ticks: u64) -> bool {
        self.max_ticks > 0 && ticks >= self.max_ticks
    }
}

impl Default for RunBounds {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// Callback invoked after every tick that moved the clock.
///
/// Implementations push the new clock state to whatever presents it.
pub trait ClockObserver: Send {
    /// Called with the clock after it advanced and what it crossed.
    fn on_tick(&mut self, clock: &WorldClock, advance: Advance);
}

/// An observer that ignores every tick.
pub struct NoOpObserver;

impl ClockObserver for NoOpObserver {
    fn on_tick(&mut self, _clock: &WorldClock, _advance: Advance) {}
}

/// Drive the session clock until a termination condition is met.
///
/// Pending commands are always handled before the next tick.
///
/// # Errors
///
/// Returns [`RunnerError::Clock`] if the clock cannot advance.
pub async fn run_clock(
    session: &SharedSession,
    commands: &mut mpsc::Receiver<ClockCommand>,
    bounds: RunBounds,
    observer: &mut dyn ClockObserver,
) -> Result<RunResult, RunnerError> {
    let mut interval = tokio::time::interval(bounds.tick_interval.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut total_ticks: u64 = 0;

    {
        let guard = session.lock().await;
        info!(
            clock = %guard.clock(),
            paused = guard.clock().is_paused(),
            speed = %guard.clock().speed(),
            tick_interval_ms = u64::try_from(bounds.tick_interval.as_millis()).unwrap_or(u64::MAX),
            max_ticks = bounds.max_ticks,
            "Clock starting"
        );
    }

    let end_reason = loop {
        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else {
                    info!("Command channel closed");
                    break RunEndReason::ChannelClosed;
                };
                let mut guard = session.lock().await;
                if !apply_command(guard.clock_mut(), command) {
                    info!("Stop requested");
                    break RunEndReason::Stopped;
                }
            }

            _ = interval.tick() => {
                let mut guard = session.lock().await;
                let clock = guard.clock_mut();
                if clock.is_paused() {
                    continue;
                }
                let advance = clock.tick()?;
                total_ticks = total_ticks.saturating_add(1);
                log_rollover(clock, advance);
                observer.on_tick(clock, advance);

                if bounds.limit_reached(total_ticks) {
                    info!(total_ticks, max_ticks = bounds.max_ticks, "Tick limit reached");
                    break RunEndReason::MaxTicksReached;
                }
            }
        }
    };

    let final_clock = session.lock().await.clock().snapshot();
    Ok(RunResult {
        end_reason,
        total_ticks,
        final_clock,
    })
}

/// Apply one command. Returns `false` if the run should stop.
fn apply_command(clock: &mut WorldClock, command: ClockCommand) -> bool {
    match command {
        ClockCommand::TogglePause => {
            clock.toggle_pause();
            if clock.is_paused() {
                info!(clock = %clock, "Clock paused");
            } else {
                info!(clock = %clock, speed = %clock.speed(), "Clock running");
            }
            true
        }
        ClockCommand::CycleSpeed => {
            if clock.is_paused() {
                debug!("Speed change ignored while paused");
            } else {
                let speed = clock.cycle_speed();
                info!(speed = %speed, "Clock speed changed");
            }
            true
        }
        ClockCommand::Stop => false,
    }
}

fn log_rollover(clock: &WorldClock, advance: Advance) {
    if advance.crossed_year() {
        info!(year = clock.year(), "New year");
    }
    if advance.crossed_day() {
        info!(
            year = clock.year(),
            day = clock.day(),
            weekday = clock.weekday_name(),
            "New day"
        );
    }
}

/// Log the end of a run.
pub fn log_run_end(result: &RunResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        year = result.final_clock.year,
        day = result.final_clock.day,
        time = %result.final_clock.time,
        "Clock stopped"
    );
    if result.total_ticks == 0 {
        warn!("Clock run ended without advancing");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::{Session, shared};

    #[derive(Default)]
    struct Recorder {
        ticks: u32,
        days: u32,
    }

    impl ClockObserver for Recorder {
        fn on_tick(&mut self, _clock: &WorldClock, advance: Advance) {
            self.ticks = self.ticks.saturating_add(1);
            self.days = self.days.saturating_add(advance.days);
        }
    }

    fn running_session() -> SharedSession {
        let mut config = SimulationConfig::default();
        config.clock.start_paused = false;
        shared(Session::from_config(&config).unwrap())
    }

    fn bounds(max_ticks: u64) -> RunBounds {
        RunBounds {
            tick_interval: Duration::from_millis(100),
            max_ticks,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn runs_until_tick_limit() {
        let session = running_session();
        let (_tx, mut rx) = mpsc::channel(8);
        let mut recorder = Recorder::default();

        let result = run_clock(&session, &mut rx, bounds(10), &mut recorder)
            .await
            .unwrap();

        assert_eq!(result.end_reason, RunEndReason::MaxTicksReached);
        assert_eq!(result.total_ticks, 10);
        assert_eq!(recorder.ticks, 10);
        // Ten ticks at speed 1 is one simulated minute.
        assert_eq!(result.final_clock.time, "8:01:00AM");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_command_ends_run_before_ticking() {
        let session = running_session();
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(ClockCommand::Stop).await.unwrap();

        let result = run_clock(&session, &mut rx, bounds(0), &mut NoOpObserver)
            .await
            .unwrap();

        assert_eq!(result.end_reason, RunEndReason::Stopped);
        assert_eq!(result.total_ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn paused_clock_waits_for_toggle() {
        let session = shared(Session::new().unwrap());
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(ClockCommand::TogglePause).await.unwrap();
        tx.send(ClockCommand::CycleSpeed).await.unwrap();

        let result = run_clock(&session, &mut rx, bounds(1), &mut NoOpObserver)
            .await
            .unwrap();

        assert_eq!(result.total_ticks, 1);
        assert!(!result.final_clock.paused);
        assert_eq!(result.final_clock.speed, 2);
        assert_eq!(result.final_clock.time, "8:00:12AM");
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_channel_ends_paused_run() {
        let session = shared(Session::new().unwrap());
        let (tx, mut rx) = mpsc::channel::<ClockCommand>(1);
        drop(tx);

        let result = run_clock(&session, &mut rx, bounds(0), &mut NoOpObserver)
            .await
            .unwrap();

        assert_eq!(result.end_reason, RunEndReason::ChannelClosed);
        assert_eq!(result.total_ticks, 0);
        assert_eq!(result.final_clock.time, "8:00:00AM");
    }

    #[tokio::test(start_paused = true)]
    async fn observer_sees_midnight() {
        let session = running_session();
        *session.lock().await.clock_mut() = WorldClock::from_parts(1, 1, 1439, 54).unwrap();
        let (_tx, mut rx) = mpsc::channel(8);
        let mut recorder = Recorder::default();

        let result = run_clock(&session, &mut rx, bounds(1), &mut recorder)
            .await
            .unwrap();

        assert_eq!(recorder.days, 1);
        assert_eq!(result.final_clock.day, 2);
        assert_eq!(result.final_clock.minute_of_day, 0);
        assert_eq!(result.final_clock.day_of_week, "Tuesday");
    }

    #[test]
    fn bounds_follow_config() {
        let mut config = SimulationConfig::default();
        config.clock.tick_interval_ms = 250;
        config.simulation.max_ticks = 40;
        let bounds = RunBounds::from_config(&config);
        assert_eq!(bounds.tick_interval, Duration::from_millis(250));
        assert!(!bounds.limit_reached(39));
        assert!(bounds.limit_reached(40));
        assert!(!RunBounds::default().limit_reached(u64::MAX));
    }
}
