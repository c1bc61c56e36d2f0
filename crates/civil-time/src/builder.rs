//! Period builder - "now plus calendar offsets"

use civil_core::{utc_zone, CivilResult, FixedOffset, Instant, Period};

use crate::{Clock, SystemClock};

/// Fluent accumulator of calendar-unit offsets.
///
/// Offsets default to zero. `build*` consumes the builder, reads the clock
/// once and applies the offsets in the fixed order years, months, days,
/// hours, minutes, seconds, milliseconds. Order matters for calendar units:
/// 01-31 plus one month then one day is 03-01, not 03-02.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PeriodBuilder {
    years: i32,
    months: i32,
    days: i32,
    hours: i32,
    minutes: i32,
    seconds: i32,
    milliseconds: i32,
}

impl PeriodBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    pub fn days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    pub fn hours(mut self, hours: i32) -> Self {
        self.hours = hours;
        self
    }

    pub fn minutes(mut self, minutes: i32) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn seconds(mut self, seconds: i32) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn milliseconds(mut self, milliseconds: i32) -> Self {
        self.milliseconds = milliseconds;
        self
    }

    /// Apply the offsets to `start` in the fixed order.
    pub fn end_from(&self, start: Instant) -> CivilResult<Instant> {
        start
            .add_years(self.years.into())?
            .add_months(self.months.into())?
            .add_days(self.days.into())?
            .add_hours(self.hours.into())?
            .add_minutes(self.minutes.into())?
            .add_seconds(self.seconds.into())?
            .add_millis(self.milliseconds.into())
    }

    /// Build against the system clock in the normalization zone.
    pub fn build(self) -> CivilResult<Period> {
        self.build_with(&SystemClock, utc_zone())
    }

    /// Build against the system clock, reading the wall clock of `zone`.
    pub fn build_in(self, zone: FixedOffset) -> CivilResult<Period> {
        self.build_with(&SystemClock, zone)
    }

    /// Build against `clock`, reading the wall clock of `zone`.
    ///
    /// Offsets that land before "now" fail with
    /// [`CivilError::InvalidPeriod`](civil_core::CivilError::InvalidPeriod);
    /// a clock reading outside the representable range fails with
    /// [`CivilError::InvalidTimestamp`](civil_core::CivilError::InvalidTimestamp).
    pub fn build_with<C: Clock + ?Sized>(self, clock: &C, zone: FixedOffset) -> CivilResult<Period> {
        let start = clock.now(zone)?;
        let end = self.end_from(start)?;
        tracing::trace!(builder = ?self, %start, %end, "building period");
        Period::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use civil_core::CivilError;

    use super::*;
    use crate::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(Instant::from_civil(2024, 6, 15, 10, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_defaults_to_empty_period() {
        let period = PeriodBuilder::new().build_with(&clock(), utc_zone()).unwrap();
        assert_eq!(period.start(), period.end());
        assert_eq!(period.start(), clock().at());
    }

    #[test]
    fn test_days_and_hours() {
        let period = PeriodBuilder::new()
            .days(1)
            .hours(2)
            .build_with(&clock(), utc_zone())
            .unwrap();

        assert_eq!(period.start(), Instant::from_civil(2024, 6, 15, 10, 0, 0, 0).unwrap());
        assert_eq!(period.end(), Instant::from_civil(2024, 6, 16, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_every_unit() {
        let period = PeriodBuilder::new()
            .years(1)
            .months(2)
            .days(3)
            .hours(4)
            .minutes(5)
            .seconds(6)
            .milliseconds(7)
            .build_with(&clock(), utc_zone())
            .unwrap();

        assert_eq!(
            period.end(),
            Instant::from_civil(2025, 8, 18, 14, 5, 6, 7).unwrap()
        );
    }

    #[test]
    fn test_setters_overwrite() {
        let builder = PeriodBuilder::new().days(5).days(1);
        assert_eq!(builder, PeriodBuilder::new().days(1));
    }

    #[test]
    fn test_months_before_days() {
        let start = Instant::from_ymd(2024, 1, 31).unwrap();
        let end = PeriodBuilder::new().months(1).days(1).end_from(start).unwrap();

        // 01-31 -> 02-29 (clamped) -> 03-01
        assert_eq!(end, Instant::from_ymd(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_negative_offsets_rejected() {
        let result = PeriodBuilder::new()
            .hours(-1)
            .build_with(&clock(), utc_zone());
        assert!(matches!(result, Err(CivilError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_mixed_sign_offsets() {
        // Net positive offsets still build
        let period = PeriodBuilder::new()
            .days(1)
            .hours(-23)
            .build_with(&clock(), utc_zone())
            .unwrap();
        assert_eq!(period.duration_in_hours(), 1);
    }

    #[test]
    fn test_zone_reading() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let period = PeriodBuilder::new()
            .hours(1)
            .build_with(&clock(), tokyo)
            .unwrap();

        assert_eq!(period.start(), Instant::from_civil(2024, 6, 15, 19, 0, 0, 0).unwrap());
        assert_eq!(period.end(), Instant::from_civil(2024, 6, 15, 20, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_system_clock_build() {
        let before = Instant::now_utc();
        let period = PeriodBuilder::new().minutes(5).build().unwrap();

        assert!(period.start() >= before);
        assert_eq!(period.duration_in_minutes(), 5);
    }

    #[test]
    fn test_unreadable_clock_fails() {
        let edge = FixedClock::new(Instant::from_naive(chrono::NaiveDateTime::MAX));
        let east = FixedOffset::east_opt(3600).unwrap();

        let result = PeriodBuilder::new().build_with(&edge, east);
        assert!(matches!(result, Err(CivilError::InvalidTimestamp(_))));
    }
}
