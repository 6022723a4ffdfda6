//! The world clock: a simulated calendar advanced in fixed sim-second steps.
//!
//! The clock is a pure accumulator. Each [`WorldClock::tick`] adds
//! [`SIM_SECONDS_PER_TICK`] times the speed multiplier, and the carry runs
//! strictly seconds, then minutes, then days, then years. Nothing here reads
//! the wall clock; the scheduling lives in [`crate::runner`].
//!
//! All derived views (12-hour time string, weekday, lighting period, coarse
//! time of day) are computed on demand from the four counters.

use std::fmt;

use aegis_types::{ClockSnapshot, DayPeriod, TimeOfDay};
use chrono::{NaiveTime, Weekday};

use crate::config::ClockConfig;

/// Days in a simulated year. There are no leap years.
pub const DAYS_PER_YEAR: u16 = 365;

/// Minutes in a simulated day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Seconds in a simulated minute.
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Simulated seconds added per tick at speed 1.
pub const SIM_SECONDS_PER_TICK: u32 = 6;

/// Real-time interval between ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Weekdays in calendar order starting from day 1.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Advancing the clock would overflow the year counter.
    #[error("year counter overflow")]
    YearOverflow,

    /// A speed multiplier other than 1, 2 or 4 was requested.
    #[error("invalid clock speed {0}, expected 1, 2 or 4")]
    InvalidSpeed(u8),

    /// Invalid clock configuration.
    #[error("invalid clock configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration problem.
        reason: String,
    },
}

/// Speed multiplier applied to every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClockSpeed {
    /// One sim-minute per real second.
    #[default]
    X1,
    /// Two sim-minutes per real second.
    X2,
    /// Four sim-minutes per real second.
    X4,
}

impl ClockSpeed {
    /// The numeric multiplier.
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
        }
    }

    /// The next speed in the 1, 2, 4 cycle, wrapping back to 1.
    pub const fn next(self) -> Self {
        match self {
            Self::X1 => Self::X2,
            Self::X2 => Self::X4,
            Self::X4 => Self::X1,
        }
    }
}

impl TryFrom<u8> for ClockSpeed {
    type Error = ClockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            4 => Ok(Self::X4),
            other => Err(ClockError::InvalidSpeed(other)),
        }
    }
}

impl fmt::Display for ClockSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

/// Calendar boundaries crossed by one advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    /// Simulated seconds that were added.
    pub seconds: u32,
    /// Day boundaries crossed.
    pub days: u32,
    /// Year boundaries crossed.
    pub years: u32,
}

impl Advance {
    /// Whether at least one midnight was crossed.
    pub const fn crossed_day(self) -> bool {
        self.days > 0
    }

    /// Whether at least one new year began.
    pub const fn crossed_year(self) -> bool {
        self.years > 0
    }
}

/// The simulated calendar.
///
/// Invariants: `year >= 1`, `day` in `1..=365`, `minute_of_day` in
/// `0..1440`, `second` in `0..60`. Every constructor and mutator keeps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldClock {
    year: u32,
    day: u16,
    minute_of_day: u16,
    second: u8,
    paused: bool,
    speed: ClockSpeed,
}

impl WorldClock {
    /// A paused clock at year 1, day 1, 08:00:00, speed 1.
    pub const fn new() -> Self {
        Self {
            year: 1,
            day: 1,
            minute_of_day: 8 * 60,
            second: 0,
            paused: true,
            speed: ClockSpeed::X1,
        }
    }

    /// Build a clock at an explicit point in time, running at speed 1.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if any counter is outside its
    /// canonical range.
    pub fn from_parts(
        year: u32,
        day: u16,
        minute_of_day: u16,
        second: u8,
    ) -> Result<Self, ClockError> {
        if year == 0 {
            return Err(invalid_config("year must be at least 1"));
        }
        if day == 0 || day > DAYS_PER_YEAR {
            return Err(invalid_config(format!(
                "day must be between 1 and {DAYS_PER_YEAR}, got {day}"
            )));
        }
        if minute_of_day >= MINUTES_PER_DAY {
            return Err(invalid_config(format!(
                "minute_of_day must be below {MINUTES_PER_DAY}, got {minute_of_day}"
            )));
        }
        if second >= SECONDS_PER_MINUTE {
            return Err(invalid_config(format!(
                "second must be below {SECONDS_PER_MINUTE}, got {second}"
            )));
        }
        Ok(Self {
            year,
            day,
            minute_of_day,
            second,
            paused: false,
            speed: ClockSpeed::X1,
        })
    }

    /// Build a clock from the `clock` section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] for out-of-range start values
    /// and [`ClockError::InvalidSpeed`] for an unsupported speed.
    pub fn from_config(config: &ClockConfig) -> Result<Self, ClockError> {
        if config.start_hour >= 24 {
            return Err(invalid_config(format!(
                "start_hour must be below 24, got {}",
                config.start_hour
            )));
        }
        let minute_of_day = u16::from(config.start_hour).saturating_mul(60);
        let mut clock = Self::from_parts(config.start_year, config.start_day, minute_of_day, 0)?;
        clock.speed = ClockSpeed::try_from(config.speed)?;
        clock.paused = config.start_paused;
        Ok(clock)
    }

    /// Current year, starting at 1.
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Current day of year, `1..=365`.
    pub const fn day(&self) -> u16 {
        self.day
    }

    /// Minutes since midnight.
    pub const fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    /// Seconds into the current minute.
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Whether ticks are currently ignored.
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current speed multiplier.
    pub const fn speed(&self) -> ClockSpeed {
        self.speed
    }

    /// Flip between paused and running. The speed is kept.
    pub const fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance the speed 1 -> 2 -> 4 -> 1. Has no effect while paused.
    ///
    /// Returns the speed in effect afterwards.
    pub const fn cycle_speed(&mut self) -> ClockSpeed {
        if !self.paused {
            self.speed = self.speed.next();
        }
        self.speed
    }

    /// Apply one real-time tick.
    ///
    /// A paused clock does not move and reports an empty [`Advance`].
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::YearOverflow`] if the year counter would wrap.
    pub fn tick(&mut self) -> Result<Advance, ClockError> {
        if self.paused {
            return Ok(Advance::default());
        }
        let step = SIM_SECONDS_PER_TICK.saturating_mul(u32::from(self.speed.multiplier()));
        self.advance_seconds(step)
    }

    /// Add `seconds` simulated seconds with ordered carry.
    ///
    /// Works whether or not the clock is paused; pausing only gates
    /// [`tick`](Self::tick). The clock is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::YearOverflow`] if the year counter would wrap.
    pub fn advance_seconds(&mut self, seconds: u32) -> Result<Advance, ClockError> {
        let per_minute = u32::from(SECONDS_PER_MINUTE);
        let per_day = u32::from(MINUTES_PER_DAY);
        let per_year = u32::from(DAYS_PER_YEAR);

        // Seconds carry into minutes.
        let total_seconds = u64::from(self.second).saturating_add(u64::from(seconds));
        let carried_minutes = total_seconds.checked_div(u64::from(per_minute)).unwrap_or(0);
        let second = total_seconds.checked_rem(u64::from(per_minute)).unwrap_or(0);

        // Minutes carry into days.
        let total_minutes = u64::from(self.minute_of_day).saturating_add(carried_minutes);
        let carried_days = total_minutes.checked_div(u64::from(per_day)).unwrap_or(0);
        let minute_of_day = total_minutes.checked_rem(u64::from(per_day)).unwrap_or(0);

        // Days (zero-based here) carry into years.
        let day_index = u64::from(self.day.saturating_sub(1)).saturating_add(carried_days);
        let carried_years = day_index.checked_div(u64::from(per_year)).unwrap_or(0);
        let day = day_index
            .checked_rem(u64::from(per_year))
            .unwrap_or(0)
            .saturating_add(1);

        let years = u32::try_from(carried_years).unwrap_or(u32::MAX);
        let year = self
            .year
            .checked_add(years)
            .ok_or(ClockError::YearOverflow)?;

        self.second = u8::try_from(second).unwrap_or(0);
        self.minute_of_day = u16::try_from(minute_of_day).unwrap_or(0);
        self.day = u16::try_from(day).unwrap_or(1);
        self.year = year;

        Ok(Advance {
            seconds,
            days: u32::try_from(carried_days).unwrap_or(u32::MAX),
            years,
        })
    }

    /// Hour of day, `0..24`.
    pub fn hour(&self) -> u8 {
        u8::try_from(self.minute_of_day.checked_div(60).unwrap_or(0)).unwrap_or(0)
    }

    /// Minute within the hour, `0..60`.
    pub fn minute(&self) -> u8 {
        u8::try_from(self.minute_of_day.checked_rem(60).unwrap_or(0)).unwrap_or(0)
    }

    /// Fractional hour of day, e.g. `17.5` at 17:30:00.
    pub fn fractional_hour(&self) -> f64 {
        f64::from(self.minute_of_day) / 60.0 + f64::from(self.second) / 3600.0
    }

    /// 12-hour time with AM/PM, e.g. `"8:05:09AM"` or `"12:00:00PM"`.
    pub fn time_string(&self) -> String {
        NaiveTime::from_hms_opt(
            u32::from(self.hour()),
            u32::from(self.minute()),
            u32::from(self.second),
        )
        .map(|time| time.format("%-I:%M:%S%p").to_string())
        .unwrap_or_default()
    }

    /// Weekday of the current day. Day 1 is a Monday.
    pub fn day_of_week(&self) -> Weekday {
        let index = usize::from(self.day.saturating_sub(1)).checked_rem(WEEK.len());
        index
            .and_then(|i| WEEK.get(i))
            .copied()
            .unwrap_or(Weekday::Mon)
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        match self.day_of_week() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Lighting period of the current hour.
    pub fn day_period(&self) -> DayPeriod {
        day_period_for_hour(self.hour())
    }

    /// Progress `0.0..=1.0` through the current lighting transition.
    ///
    /// Dawn runs 05:00 to 07:00, dusk 17:00 to 20:00 and night darkens from
    /// 20:00 to midnight. Deep night and full day are steady at `0.0`.
    pub fn period_progress(&self) -> f64 {
        let hour = self.fractional_hour();
        let progress = match self.day_period() {
            DayPeriod::Dawn => (hour - 5.0) / 2.0,
            DayPeriod::Dusk => (hour - 17.0) / 3.0,
            DayPeriod::Night => (hour - 20.0) / 4.0,
            DayPeriod::DeepNight | DayPeriod::Day => 0.0,
        };
        progress.clamp(0.0, 1.0)
    }

    /// Coarse time of day shown in the top bar.
    pub fn time_of_day(&self) -> TimeOfDay {
        match self.hour() {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Noon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Everything the presentation layer needs, in one value.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            year: self.year,
            day: self.day,
            day_of_week: self.weekday_name().to_owned(),
            time: self.time_string(),
            minute_of_day: self.minute_of_day,
            second: self.second,
            period: self.day_period(),
            period_progress: self.period_progress(),
            time_of_day: self.time_of_day(),
            paused: self.paused,
            speed: self.speed.multiplier(),
        }
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorldClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Year {} Day {} ({}) {}",
            self.year,
            self.day,
            self.weekday_name(),
            self.time_string()
        )
    }
}

/// Lighting band for a 24-hour clock hour.
///
/// Deep night `[0,5)`, dawn `[5,7)`, day `[7,17)`, dusk `[17,20)`,
/// night `[20,24)`.
pub const fn day_period_for_hour(hour: u8) -> DayPeriod {
    match hour {
        0..=4 => DayPeriod::DeepNight,
        5..=6 => DayPeriod::Dawn,
        7..=16 => DayPeriod::Day,
        17..=19 => DayPeriod::Dusk,
        _ => DayPeriod::Night,
    }
}

fn invalid_config(reason: impl Into<String>) -> ClockError {
    ClockError::InvalidConfig {
        reason: reason.into(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn make_clock(day: u16, minute_of_day: u16, second: u8) -> WorldClock {
        WorldClock::from_parts(1, day, minute_of_day, second).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_clock_is_paused_at_eight_am() {
        let clock = WorldClock::new();
        assert!(clock.is_paused());
        assert_eq!(clock.year(), 1);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.time_string(), "8:00:00AM");
        assert_eq!(clock.speed(), ClockSpeed::X1);
    }

    #[test]
    fn paused_tick_does_nothing() {
        let mut clock = WorldClock::new();
        let before = clock.clone();
        let advance = clock.tick().unwrap();
        assert_eq!(advance, Advance::default());
        assert_eq!(clock, before);
    }

    #[test]
    fn tick_adds_six_seconds_per_speed_step() {
        let mut clock = make_clock(1, 0, 0);
        clock.tick().unwrap();
        assert_eq!(clock.second(), 6);

        clock.cycle_speed();
        clock.tick().unwrap();
        assert_eq!(clock.second(), 18);

        clock.cycle_speed();
        clock.tick().unwrap();
        assert_eq!(clock.second(), 42);
    }

    #[test]
    fn one_tick_carries_through_minute_and_day() {
        let mut clock = make_clock(1, 1439, 54);
        let advance = clock.tick().unwrap();
        assert_eq!(clock.day(), 2);
        assert_eq!(clock.minute_of_day(), 0);
        assert_eq!(clock.second(), 0);
        assert!(advance.crossed_day());
        assert!(!advance.crossed_year());
    }

    #[test]
    fn last_second_of_the_year_rolls_into_the_next() {
        let mut clock = make_clock(365, 1439, 59);
        let advance = clock.advance_seconds(1).unwrap();
        assert_eq!(clock.year(), 2);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.minute_of_day(), 0);
        assert_eq!(clock.second(), 0);
        assert_eq!(advance.years, 1);
    }

    #[test]
    fn large_advances_keep_counters_canonical() {
        let mut clock = make_clock(100, 720, 30);
        // Two years, three days, five minutes and forty seconds.
        let seconds = ((2 * 365 + 3) * 1440 + 5) * 60 + 40;
        let advance = clock.advance_seconds(seconds).unwrap();
        assert_eq!(clock.year(), 3);
        assert_eq!(clock.day(), 103);
        assert_eq!(clock.minute_of_day(), 726);
        assert_eq!(clock.second(), 10);
        assert_eq!(advance.years, 2);
        assert_eq!(advance.days, 2 * 365 + 3);
    }

    #[test]
    fn year_overflow_leaves_clock_untouched() {
        let mut clock = WorldClock::from_parts(u32::MAX, 365, 1439, 59).unwrap();
        let before = clock.clone();
        assert_eq!(clock.advance_seconds(1), Err(ClockError::YearOverflow));
        assert_eq!(clock, before);
    }

    #[test]
    fn weekday_repeats_every_seven_days() {
        assert_eq!(make_clock(1, 0, 0).weekday_name(), "Monday");
        assert_eq!(make_clock(2, 0, 0).weekday_name(), "Tuesday");
        assert_eq!(make_clock(7, 0, 0).weekday_name(), "Sunday");
        assert_eq!(make_clock(8, 0, 0).weekday_name(), "Monday");

        let mut clock = make_clock(365, 1439, 59);
        clock.advance_seconds(1).unwrap();
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.weekday_name(), "Monday");
        assert_eq!(clock.day_of_week(), Weekday::Mon);
    }

    #[test]
    fn period_band_boundaries() {
        let at = |h: u16, m: u16| make_clock(1, h * 60 + m, 0).day_period();
        assert_eq!(at(4, 59), DayPeriod::DeepNight);
        assert_eq!(at(5, 0), DayPeriod::Dawn);
        assert_eq!(at(6, 59), DayPeriod::Dawn);
        assert_eq!(at(7, 0), DayPeriod::Day);
        assert_eq!(at(16, 59), DayPeriod::Day);
        assert_eq!(at(17, 0), DayPeriod::Dusk);
        assert_eq!(at(19, 59), DayPeriod::Dusk);
        assert_eq!(at(20, 0), DayPeriod::Night);
        assert_eq!(at(23, 59), DayPeriod::Night);
        assert_eq!(at(0, 0), DayPeriod::DeepNight);
    }

    #[test]
    fn period_progress_interpolates_transitions() {
        assert!(close(make_clock(1, 5 * 60, 0).period_progress(), 0.0));
        assert!(close(make_clock(1, 6 * 60, 0).period_progress(), 0.5));
        assert!(close(make_clock(1, 18 * 60 + 30, 0).period_progress(), 0.5));
        assert!(close(make_clock(1, 22 * 60, 0).period_progress(), 0.5));
        assert!(close(make_clock(1, 12 * 60, 0).period_progress(), 0.0));
        assert!(close(make_clock(1, 2 * 60, 0).period_progress(), 0.0));
    }

    #[test]
    fn time_string_is_twelve_hour_with_padding() {
        assert_eq!(make_clock(1, 0, 0).time_string(), "12:00:00AM");
        assert_eq!(make_clock(1, 5, 9).time_string(), "12:05:09AM");
        assert_eq!(make_clock(1, 12 * 60, 0).time_string(), "12:00:00PM");
        assert_eq!(make_clock(1, 13 * 60 + 7, 3).time_string(), "1:07:03PM");
        assert_eq!(make_clock(1, 1439, 59).time_string(), "11:59:59PM");
    }

    #[test]
    fn speed_cycles_only_while_running() {
        let mut clock = WorldClock::new();
        assert_eq!(clock.cycle_speed(), ClockSpeed::X1);

        clock.toggle_pause();
        assert_eq!(clock.cycle_speed(), ClockSpeed::X2);
        assert_eq!(clock.cycle_speed(), ClockSpeed::X4);
        assert_eq!(clock.cycle_speed(), ClockSpeed::X1);
        clock.cycle_speed();

        // Pausing keeps the last speed.
        clock.toggle_pause();
        clock.toggle_pause();
        assert_eq!(clock.speed(), ClockSpeed::X2);
    }

    #[test]
    fn speed_parses_only_supported_multipliers() {
        assert_eq!(ClockSpeed::try_from(4), Ok(ClockSpeed::X4));
        assert_eq!(ClockSpeed::try_from(3), Err(ClockError::InvalidSpeed(3)));
        assert_eq!(ClockSpeed::X2.to_string(), "2x");
    }

    #[test]
    fn from_parts_rejects_out_of_range_counters() {
        assert!(WorldClock::from_parts(0, 1, 0, 0).is_err());
        assert!(WorldClock::from_parts(1, 0, 0, 0).is_err());
        assert!(WorldClock::from_parts(1, 366, 0, 0).is_err());
        assert!(WorldClock::from_parts(1, 1, 1440, 0).is_err());
        assert!(WorldClock::from_parts(1, 1, 0, 60).is_err());
    }

    #[test]
    fn from_config_applies_start_values() {
        let config = ClockConfig {
            start_year: 2,
            start_day: 10,
            start_hour: 19,
            start_paused: false,
            speed: 4,
            tick_interval_ms: 100,
        };
        let clock = WorldClock::from_config(&config).unwrap();
        assert_eq!(clock.year(), 2);
        assert_eq!(clock.day(), 10);
        assert_eq!(clock.hour(), 19);
        assert!(!clock.is_paused());
        assert_eq!(clock.speed(), ClockSpeed::X4);
        assert_eq!(clock.time_of_day(), TimeOfDay::Evening);
    }

    #[test]
    fn time_of_day_bands() {
        let at = |h: u16| make_clock(1, h * 60, 0).time_of_day();
        assert_eq!(at(4), TimeOfDay::Night);
        assert_eq!(at(5), TimeOfDay::Morning);
        assert_eq!(at(12), TimeOfDay::Noon);
        assert_eq!(at(17), TimeOfDay::Evening);
        assert_eq!(at(21), TimeOfDay::Night);
        assert!(at(18).is_night());
        assert!(!at(9).is_night());
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut clock = make_clock(3, 17 * 60 + 30, 15);
        clock.cycle_speed();
        let snapshot = clock.snapshot();
        assert_eq!(snapshot.day, 3);
        assert_eq!(snapshot.day_of_week, "Wednesday");
        assert_eq!(snapshot.time, "5:30:15PM");
        assert_eq!(snapshot.period, DayPeriod::Dusk);
        assert_eq!(snapshot.time_of_day, TimeOfDay::Evening);
        assert!(!snapshot.paused);
        assert_eq!(snapshot.speed, 2);
    }
}
