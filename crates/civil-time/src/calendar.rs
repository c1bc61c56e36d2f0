//! Calendar - a clock paired with an explicit zone and text patterns

use civil_core::pattern::{
    self, DATE_PATTERN, DATE_TIME_PATTERN, ISO_DATE_PATTERN, ISO_DATE_TIME_PATTERN, TIME_PATTERN,
};
use civil_core::{utc_zone, CivilError, CivilResult, FixedOffset, Instant, Period};

use crate::{Clock, PeriodBuilder, SystemClock};

/// Largest zone offset accepted, in seconds (UTC-18:00 to UTC+18:00)
pub const MAX_ZONE_OFFSET_SECS: i32 = 18 * 3600;

/// Calendar configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Zone whose wall clock `now` reads
    pub zone: FixedOffset,
    /// Pattern for dates
    pub date_pattern: String,
    /// Pattern for times of day
    pub time_pattern: String,
    /// Pattern for date-times
    pub date_time_pattern: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            zone: utc_zone(),
            date_pattern: DATE_PATTERN.to_string(),
            time_pattern: TIME_PATTERN.to_string(),
            date_time_pattern: DATE_TIME_PATTERN.to_string(),
        }
    }
}

impl CalendarConfig {
    /// ISO-8601 text (`2024-01-31`, `2024-01-31T23:59:59.999`)
    pub fn iso() -> Self {
        CalendarConfig {
            zone: utc_zone(),
            date_pattern: ISO_DATE_PATTERN.to_string(),
            time_pattern: "%H:%M:%S%.3f".to_string(),
            date_time_pattern: ISO_DATE_TIME_PATTERN.to_string(),
        }
    }

    pub fn with_zone(mut self, zone: FixedOffset) -> Self {
        self.zone = zone;
        self
    }

    /// Check the zone offset and every pattern.
    pub fn validate(&self) -> CivilResult<()> {
        let offset = self.zone.local_minus_utc();
        if offset.abs() > MAX_ZONE_OFFSET_SECS {
            tracing::debug!(offset, "rejected calendar zone");
            return Err(CivilError::InvalidZone(offset));
        }
        pattern::check(&self.date_pattern)?;
        pattern::check(&self.time_pattern)?;
        pattern::check(&self.date_time_pattern)
    }
}

/// Clock plus configuration
#[derive(Debug)]
pub struct Calendar<C: Clock = SystemClock> {
    clock: C,
    config: CalendarConfig,
}

impl Calendar<SystemClock> {
    /// Calendar on the system clock
    pub fn new(config: CalendarConfig) -> CivilResult<Self> {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> Calendar<C> {
    /// Calendar on a custom clock. Fails if `config` does not validate.
    pub fn with_clock(clock: C, config: CalendarConfig) -> CivilResult<Self> {
        config.validate()?;
        Ok(Calendar { clock, config })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current wall-clock reading of the configured zone
    pub fn now(&self) -> CivilResult<Instant> {
        self.clock.now(self.config.zone)
    }

    /// Midnight of the current day in the configured zone
    pub fn today(&self) -> CivilResult<Instant> {
        self.now().map(Instant::zero_time)
    }

    /// Build `builder` against this calendar's clock and zone
    pub fn period(&self, builder: PeriodBuilder) -> CivilResult<Period> {
        builder.build_with(&self.clock, self.config.zone)
    }

    pub fn format_date(&self, instant: Instant) -> CivilResult<String> {
        instant.format(&self.config.date_pattern)
    }

    pub fn format_time(&self, instant: Instant) -> CivilResult<String> {
        instant.format(&self.config.time_pattern)
    }

    pub fn format_date_time(&self, instant: Instant) -> CivilResult<String> {
        instant.format(&self.config.date_time_pattern)
    }

    /// Parse with the date-time pattern
    pub fn parse(&self, input: &str) -> CivilResult<Instant> {
        Instant::parse(input, &self.config.date_time_pattern)
    }

    /// Parse with the date pattern, yielding midnight
    pub fn parse_date(&self, input: &str) -> CivilResult<Instant> {
        Instant::parse(input, &self.config.date_pattern)
    }
}
