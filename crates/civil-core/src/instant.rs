//! Instant - an immutable civil timestamp with millisecond resolution
//!
//! Every instant is stored as milliseconds since 1970-01-01T00:00:00 in a
//! single normalization zone (UTC). Wall-clock readings taken in other zones
//! are normalized on the way in: the civil reading is kept, the offset is
//! dropped. Validation only happens at the boundary (epoch values, civil
//! fields, parsed text); instants derived from other instants are valid by
//! construction.

use std::fmt::{self, Write};
use std::ops::Sub;
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    Timelike, Utc, Weekday,
};

use crate::pattern::{self, DATE_PATTERN, DATE_TIME_PATTERN, TIME_PATTERN};
use crate::{CivilError, CivilField, CivilResult, ExactDuration, Period};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// The zone every instant is normalized to.
#[inline]
pub fn utc_zone() -> FixedOffset {
    Utc.fix()
}

/// Point in civil time, normalized to UTC, millisecond precision.
///
/// Ordering and equality are by epoch milliseconds. `Option<Instant>` sorts
/// `None` below every instant, so a present instant always compares greater
/// than an absent one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(i64);

impl Instant {
    /// 1970-01-01T00:00:00.000
    pub const EPOCH_ZERO: Instant = Instant(0);

    /// Current wall-clock reading of `zone`, normalized.
    pub fn now(zone: FixedOffset) -> CivilResult<Self> {
        Instant::now_utc().in_zone(zone)
    }

    /// Current wall-clock reading of the normalization zone.
    pub fn now_utc() -> Self {
        Instant::from_naive(Utc::now().naive_utc())
    }

    /// Wall-clock reading of `zone` when the normalization zone reads `self`.
    ///
    /// Fails with [`CivilError::InvalidTimestamp`] when the offset pushes the
    /// reading out of the representable range.
    pub fn in_zone(self, zone: FixedOffset) -> CivilResult<Self> {
        self.add_seconds(zone.local_minus_utc().into())
    }

    /// Construct from epoch milliseconds.
    ///
    /// Fails with [`CivilError::InvalidTimestamp`] when the value has no
    /// civil date-time representation.
    pub fn from_epoch_millis(millis: i64) -> CivilResult<Self> {
        match DateTime::from_timestamp_millis(millis) {
            Some(dt) if dt.timestamp_millis() == millis => Ok(Instant(millis)),
            _ => Err(CivilError::InvalidTimestamp(millis)),
        }
    }

    /// Construct from civil fields.
    ///
    /// Fields are checked in order year, month, day, hour, minute, second,
    /// millisecond; the first one out of range is reported.
    pub fn from_civil(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> CivilResult<Self> {
        let invalid = |field, value: u32| CivilError::InvalidCivilField {
            field,
            value: value as i64,
        };

        if !(1..=12).contains(&month) {
            return Err(invalid(CivilField::Month, month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CivilError::InvalidCivilField {
                field: CivilField::Year,
                value: year as i64,
            });
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| invalid(CivilField::Day, day))?;

        if hour >= 24 {
            return Err(invalid(CivilField::Hour, hour));
        }
        if minute >= 60 {
            return Err(invalid(CivilField::Minute, minute));
        }
        if second >= 60 {
            return Err(invalid(CivilField::Second, second));
        }
        // chrono accepts 1000..2000 as a leap second; civil fields do not
        if millisecond >= 1000 {
            return Err(invalid(CivilField::Millisecond, millisecond));
        }
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
            .ok_or_else(|| invalid(CivilField::Millisecond, millisecond))?;

        Instant::from_epoch_millis(date.and_time(time).and_utc().timestamp_millis())
    }

    /// Midnight of a civil date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CivilResult<Self> {
        Instant::from_civil(year, month, day, 0, 0, 0, 0)
    }

    /// Normalize a civil date-time, truncating below the millisecond.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Instant(dt.and_utc().timestamp_millis())
    }

    #[inline]
    pub fn epoch_millis(self) -> i64 {
        self.0
    }

    pub fn to_naive(self) -> NaiveDateTime {
        // constructed instants are always inside chrono's range
        DateTime::from_timestamp_millis(self.0).map_or(NaiveDateTime::MIN, |dt| dt.naive_utc())
    }

    pub fn to_date(self) -> NaiveDate {
        self.to_naive().date()
    }

    pub fn to_time(self) -> NaiveTime {
        self.to_naive().time()
    }

    pub fn to_utc(self) -> DateTime<Utc> {
        self.to_naive().and_utc()
    }

    // Arithmetic

    /// Offset by an exact number of milliseconds.
    pub fn add_millis(self, millis: i64) -> CivilResult<Self> {
        let target = self
            .0
            .checked_add(millis)
            .ok_or(CivilError::InvalidTimestamp(self.0.saturating_add(millis)))?;
        Instant::from_epoch_millis(target)
    }

    pub fn add_seconds(self, seconds: i64) -> CivilResult<Self> {
        self.add_units(seconds, MILLIS_PER_SECOND)
    }

    pub fn add_minutes(self, minutes: i64) -> CivilResult<Self> {
        self.add_units(minutes, MILLIS_PER_MINUTE)
    }

    pub fn add_hours(self, hours: i64) -> CivilResult<Self> {
        self.add_units(hours, MILLIS_PER_HOUR)
    }

    /// Days are exact: the normalization zone has no variable-length days.
    pub fn add_days(self, days: i64) -> CivilResult<Self> {
        self.add_units(days, MILLIS_PER_DAY)
    }

    pub fn add_weeks(self, weeks: i64) -> CivilResult<Self> {
        self.add_units(weeks, MILLIS_PER_WEEK)
    }

    /// Calendar months. A day-of-month missing from the target month is
    /// clamped to that month's last day (2024-01-31 + 1 month = 2024-02-29).
    pub fn add_months(self, months: i64) -> CivilResult<Self> {
        let overflow = || CivilError::InvalidTimestamp(self.0);
        let step = Months::new(u32::try_from(months.unsigned_abs()).map_err(|_| overflow())?);
        let naive = self.to_naive();
        let shifted = if months >= 0 {
            naive.checked_add_months(step)
        } else {
            naive.checked_sub_months(step)
        };
        shifted.map(Instant::from_naive).ok_or_else(overflow)
    }

    /// Calendar years, clamping February 29th to the 28th in common years.
    pub fn add_years(self, years: i64) -> CivilResult<Self> {
        let months = years
            .checked_mul(12)
            .ok_or(CivilError::InvalidTimestamp(self.0))?;
        self.add_months(months)
    }

    pub fn add_duration(self, duration: ExactDuration) -> CivilResult<Self> {
        self.add_millis(duration.to_millis())
    }

    fn add_units(self, count: i64, unit_millis: i64) -> CivilResult<Self> {
        let millis = count
            .checked_mul(unit_millis)
            .ok_or(CivilError::InvalidTimestamp(self.0))?;
        self.add_millis(millis)
    }

    // Civil fields

    pub fn year(self) -> i32 {
        self.to_naive().year()
    }

    /// Month of year, 1-12
    pub fn month(self) -> u32 {
        self.to_naive().month()
    }

    /// Day of month, 1-31
    pub fn day(self) -> u32 {
        self.to_naive().day()
    }

    pub fn hour(self) -> u32 {
        self.to_naive().hour()
    }

    pub fn minute(self) -> u32 {
        self.to_naive().minute()
    }

    pub fn second(self) -> u32 {
        self.to_naive().second()
    }

    pub fn millisecond(self) -> u32 {
        self.0.rem_euclid(MILLIS_PER_SECOND) as u32
    }

    /// Day of week, Monday first (`Weekday::num_days_from_monday` gives
    /// Monday=0 through Sunday=6).
    pub fn day_of_week(self) -> Weekday {
        self.to_naive().weekday()
    }

    /// Day of year, 1-366
    pub fn day_of_year(self) -> u32 {
        self.to_naive().ordinal()
    }

    /// Start of this instant's civil day.
    pub fn zero_time(self) -> Self {
        Instant(self.0 - self.0.rem_euclid(MILLIS_PER_DAY))
    }

    // Comparison

    #[inline]
    pub fn is_after(self, other: Instant) -> bool {
        self > other
    }

    #[inline]
    pub fn is_after_or_equal(self, other: Instant) -> bool {
        self >= other
    }

    #[inline]
    pub fn is_before(self, other: Instant) -> bool {
        self < other
    }

    #[inline]
    pub fn is_before_or_equal(self, other: Instant) -> bool {
        self <= other
    }

    /// Period spanning both instants, whichever comes first.
    pub fn to_period(self, other: Instant) -> Period {
        if self <= other {
            Period::ordered(self, other)
        } else {
            Period::ordered(other, self)
        }
    }

    pub fn is_in_period(self, period: &Period) -> bool {
        period.contains(self)
    }

    // Text

    /// Render with a strftime-style pattern.
    pub fn format(self, pattern: &str) -> CivilResult<String> {
        let items = pattern::compile(pattern)?;
        let mut out = String::new();
        write!(out, "{}", self.to_naive().format_with_items(items.iter()))
            .map_err(|_| CivilError::InvalidPattern(pattern.to_string()))?;
        Ok(out)
    }

    /// Parse with a strftime-style pattern.
    ///
    /// A pattern with only date fields yields midnight of that date; one with
    /// only time fields yields that time on 1970-01-01. Patterns that cannot
    /// be rendered by [`Instant::format`] (offset specifiers included) fail
    /// with [`CivilError::InvalidPattern`], and a leap second (`:60`) fails
    /// like any other out-of-range field.
    pub fn parse(input: &str, pattern: &str) -> CivilResult<Self> {
        Instant::EPOCH_ZERO.format(pattern)?;

        let failed = |reason: String| {
            tracing::debug!(input, pattern, %reason, "instant parse failed");
            CivilError::ParseError {
                input: input.to_string(),
                pattern: pattern.to_string(),
                reason,
            }
        };

        let dt = match NaiveDateTime::parse_from_str(input, pattern) {
            Ok(dt) => dt,
            Err(err) if err.kind() == ParseErrorKind::NotEnough => {
                if let Ok(date) = NaiveDate::parse_from_str(input, pattern) {
                    date.and_time(NaiveTime::MIN)
                } else if let Ok(time) = NaiveTime::parse_from_str(input, pattern) {
                    Instant::EPOCH_ZERO.to_date().and_time(time)
                } else {
                    return Err(failed(err.to_string()));
                }
            }
            Err(err) => return Err(failed(err.to_string())),
        };
        civil_reading(dt).map_err(failed)
    }

    pub fn to_date_string(self) -> String {
        self.to_naive().format(DATE_PATTERN).to_string()
    }

    pub fn to_time_string(self) -> String {
        self.to_naive().format(TIME_PATTERN).to_string()
    }

    pub fn to_date_time_string(self) -> String {
        self.to_naive().format(DATE_TIME_PATTERN).to_string()
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::from_naive(dt)
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Instant::from_naive(date.and_time(NaiveTime::MIN))
    }
}

impl From<Instant> for NaiveDateTime {
    fn from(instant: Instant) -> Self {
        instant.to_naive()
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.to_utc()
    }
}

impl TryFrom<i64> for Instant {
    type Error = CivilError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Instant::from_epoch_millis(millis)
    }
}

impl Sub<Instant> for Instant {
    type Output = ExactDuration;

    /// Exact elapsed time; negative when `rhs` is later.
    #[inline]
    fn sub(self, rhs: Instant) -> Self::Output {
        ExactDuration::from_millis(self.0 - rhs.0)
    }
}

/// Accepts ISO-8601 local date-times (`2024-01-31T10:00:00`, optional
/// fraction) and plain dates (`2024-01-31`).
impl FromStr for Instant {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let failed = |reason: String| CivilError::ParseError {
            input: s.to_string(),
            pattern: "ISO-8601".to_string(),
            reason,
        };

        if let Ok(dt) = s.parse::<NaiveDateTime>() {
            return civil_reading(dt).map_err(failed);
        }
        s.parse::<NaiveDate>()
            .map(Instant::from)
            .map_err(|err| failed(err.to_string()))
    }
}

/// Normalize a parsed reading, rejecting chrono's leap-second encoding
/// (nanoseconds past one billion), which civil fields cannot express.
fn civil_reading(dt: NaiveDateTime) -> Result<Instant, String> {
    if dt.nanosecond() >= 1_000_000_000 {
        return Err("second 60 is out of range".to_string());
    }
    Ok(Instant::from_naive(dt))
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format(DATE_TIME_PATTERN))
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({})", self.to_naive().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}
