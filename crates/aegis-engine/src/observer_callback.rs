//! Clock observer that reports lighting changes and periodic snapshots.
//!
//! The presentation layer is not part of this binary, so the observer
//! stands in for it: every change of [`DayPeriod`] is logged at info level
//! and every `snapshot_every` ticks the full [`ClockSnapshot`] is logged as
//! JSON at debug level.
//!
//! [`ClockSnapshot`]: aegis_types::ClockSnapshot

use aegis_core::clock::{Advance, WorldClock};
use aegis_core::runner::ClockObserver;
use aegis_types::DayPeriod;
use tracing::{debug, info, warn};

/// Observer that logs what a top bar would show.
pub struct LoggingObserver {
    last_period: Option<DayPeriod>,
    ticks: u64,
    snapshot_every: u64,
}

impl LoggingObserver {
    /// Log a JSON snapshot every `snapshot_every` ticks (0 disables it).
    pub const fn new(snapshot_every: u64) -> Self {
        Self {
            last_period: None,
            ticks: 0,
            snapshot_every,
        }
    }

    /// Returns the period if it differs from the last one seen.
    fn period_change(&mut self, clock: &WorldClock) -> Option<DayPeriod> {
        let period = clock.day_period();
        if self.last_period == Some(period) {
            return None;
        }
        self.last_period = Some(period);
        Some(period)
    }

    const fn snapshot_due(&self) -> bool {
        matches!(self.ticks.checked_rem(self.snapshot_every), Some(0))
    }
}

impl ClockObserver for LoggingObserver {
    fn on_tick(&mut self, clock: &WorldClock, _advance: Advance) {
        self.ticks = self.ticks.saturating_add(1);

        if let Some(period) = self.period_change(clock) {
            info!(
                period = ?period,
                dark = period.is_dark(),
                time = %clock.time_string(),
                "Day period changed"
            );
        }

        if self.snapshot_due() {
            match serde_json::to_string(&clock.snapshot()) {
                Ok(json) => debug!(tick = self.ticks, snapshot = %json, "Clock snapshot"),
                Err(e) => warn!(error = %e, "failed to serialize clock snapshot"),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_period_once() {
        let mut observer = LoggingObserver::new(0);
        let mut clock = WorldClock::from_parts(1, 1, 16 * 60 + 59, 54).unwrap();

        assert_eq!(observer.period_change(&clock), Some(DayPeriod::Day));
        assert_eq!(observer.period_change(&clock), None);

        clock.tick().unwrap();
        assert_eq!(observer.period_change(&clock), Some(DayPeriod::Dusk));
        assert_eq!(observer.period_change(&clock), None);
    }

    #[test]
    fn snapshot_cadence() {
        let mut observer = LoggingObserver::new(3);
        let clock = WorldClock::from_parts(1, 1, 0, 0).unwrap();
        let mut due = Vec::new();
        for _ in 0..6 {
            observer.on_tick(&clock, Advance::default());
            due.push(observer.snapshot_due());
        }
        assert_eq!(due, [false, false, true, false, false, true]);
    }

    #[test]
    fn zero_cadence_never_snapshots() {
        let mut observer = LoggingObserver::new(0);
        let clock = WorldClock::new();
        observer.on_tick(&clock, Advance::default());
        assert!(!observer.snapshot_due());
    }
}
