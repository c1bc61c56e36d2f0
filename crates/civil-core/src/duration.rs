//! Exact durations - elapsed time with no calendar interpretation

use std::fmt::{self, Write};
use std::ops::{Add, Mul, Neg, Sub};

use chrono::TimeDelta;

use crate::instant::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::{CivilError, CivilResult, Instant, Period};

/// Signed elapsed time in milliseconds
///
/// Factories, operators and the plain arithmetic methods saturate at
/// `i64::MIN`/`i64::MAX` milliseconds; the `checked_*` variants report
/// [`CivilError::DurationOverflow`] instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExactDuration(i64);

impl ExactDuration {
    pub const ZERO: ExactDuration = ExactDuration(0);
    pub const ONE_SECOND: ExactDuration = ExactDuration(MILLIS_PER_SECOND);
    pub const ONE_MINUTE: ExactDuration = ExactDuration(MILLIS_PER_MINUTE);
    pub const ONE_HOUR: ExactDuration = ExactDuration(MILLIS_PER_HOUR);
    pub const ONE_DAY: ExactDuration = ExactDuration(MILLIS_PER_DAY);

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        ExactDuration(millis)
    }

    #[inline]
    pub const fn of_seconds(seconds: i64) -> Self {
        ExactDuration(seconds.saturating_mul(MILLIS_PER_SECOND))
    }

    #[inline]
    pub const fn of_minutes(minutes: i64) -> Self {
        ExactDuration(minutes.saturating_mul(MILLIS_PER_MINUTE))
    }

    #[inline]
    pub const fn of_hours(hours: i64) -> Self {
        ExactDuration(hours.saturating_mul(MILLIS_PER_HOUR))
    }

    #[inline]
    pub const fn of_days(days: i64) -> Self {
        ExactDuration(days.saturating_mul(MILLIS_PER_DAY))
    }

    /// Elapsed time from `start` to `end`, negative if `end` is earlier.
    #[inline]
    pub fn between(start: Instant, end: Instant) -> Self {
        end - start
    }

    // Conversions truncate toward zero

    #[inline]
    pub fn to_millis(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn to_seconds(self) -> i64 {
        self.0 / MILLIS_PER_SECOND
    }

    #[inline]
    pub fn to_minutes(self) -> i64 {
        self.0 / MILLIS_PER_MINUTE
    }

    #[inline]
    pub fn to_hours(self) -> i64 {
        self.0 / MILLIS_PER_HOUR
    }

    #[inline]
    pub fn to_days(self) -> i64 {
        self.0 / MILLIS_PER_DAY
    }

    /// Fails with [`CivilError::DurationOverflow`] outside `TimeDelta`'s range
    /// (which stops one millisecond short of `i64::MIN`).
    pub fn to_time_delta(self) -> CivilResult<TimeDelta> {
        TimeDelta::try_milliseconds(self.0).ok_or(CivilError::DurationOverflow)
    }

    // Arithmetic

    #[inline]
    pub fn add(self, other: ExactDuration) -> Self {
        self + other
    }

    #[inline]
    pub fn minus(self, other: ExactDuration) -> Self {
        self - other
    }

    /// Scale by `factor`; negative factors flip the sign.
    #[inline]
    pub fn multiply(self, factor: i64) -> Self {
        self * factor
    }

    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    #[inline]
    pub fn abs(self) -> Self {
        ExactDuration(self.0.saturating_abs())
    }

    pub fn checked_add(self, other: ExactDuration) -> CivilResult<Self> {
        self.0
            .checked_add(other.0)
            .map(ExactDuration)
            .ok_or(CivilError::DurationOverflow)
    }

    pub fn checked_minus(self, other: ExactDuration) -> CivilResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(ExactDuration)
            .ok_or(CivilError::DurationOverflow)
    }

    pub fn checked_multiply(self, factor: i64) -> CivilResult<Self> {
        self.0
            .checked_mul(factor)
            .map(ExactDuration)
            .ok_or(CivilError::DurationOverflow)
    }

    // Sign

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Not negative. Zero counts as positive here, unlike the strict
    /// [`Instant::is_after`].
    #[inline]
    pub fn is_positive(self) -> bool {
        !self.is_negative()
    }

    // Comparison

    #[inline]
    pub fn is_longer(self, other: ExactDuration) -> bool {
        self > other
    }

    #[inline]
    pub fn is_longer_or_equal(self, other: ExactDuration) -> bool {
        self >= other
    }

    #[inline]
    pub fn is_shorter(self, other: ExactDuration) -> bool {
        self < other
    }

    #[inline]
    pub fn is_shorter_or_equal(self, other: ExactDuration) -> bool {
        self <= other
    }

    /// Period from `start` to `start + self`.
    ///
    /// Negative durations would end before they start and fail with
    /// [`CivilError::InvalidPeriod`].
    pub fn to_period(self, start: Instant) -> CivilResult<Period> {
        Period::from_duration(start, self)
    }
}

impl From<&Period> for ExactDuration {
    fn from(period: &Period) -> Self {
        period.to_duration()
    }
}

impl From<Period> for ExactDuration {
    fn from(period: Period) -> Self {
        period.to_duration()
    }
}

/// Truncates below the millisecond.
impl From<TimeDelta> for ExactDuration {
    fn from(delta: TimeDelta) -> Self {
        ExactDuration(delta.num_milliseconds())
    }
}

impl TryFrom<std::time::Duration> for ExactDuration {
    type Error = CivilError;

    fn try_from(duration: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(duration.as_millis())
            .map(ExactDuration)
            .map_err(|_| CivilError::DurationOverflow)
    }
}

impl Add for ExactDuration {
    type Output = ExactDuration;

    #[inline]
    fn add(self, rhs: ExactDuration) -> Self::Output {
        ExactDuration(self.0.saturating_add(rhs.0))
    }
}

impl Sub for ExactDuration {
    type Output = ExactDuration;

    #[inline]
    fn sub(self, rhs: ExactDuration) -> Self::Output {
        ExactDuration(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<i64> for ExactDuration {
    type Output = ExactDuration;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        ExactDuration(self.0.saturating_mul(rhs))
    }
}

impl Neg for ExactDuration {
    type Output = ExactDuration;

    #[inline]
    fn neg(self) -> Self::Output {
        ExactDuration(self.0.saturating_neg())
    }
}

/// ISO-8601 duration text: `PT1H30M`, `PT-0.5S`, `PT0S`.
///
/// Each component carries its own sign, so `-90` minutes renders as
/// `PT-1H-30M`.
impl fmt::Display for ExactDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("PT0S");
        }

        let hours = self.0 / MILLIS_PER_HOUR;
        let minutes = (self.0 % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let seconds = (self.0 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        let millis = self.0 % MILLIS_PER_SECOND;

        let mut out = String::from("PT");
        if hours != 0 {
            write!(out, "{hours}H")?;
        }
        if minutes != 0 {
            write!(out, "{minutes}M")?;
        }
        if seconds != 0 || millis != 0 {
            if seconds == 0 && millis < 0 {
                out.push_str("-0");
            } else {
                write!(out, "{seconds}")?;
            }
            if millis != 0 {
                let fraction = format!("{:03}", millis.abs());
                write!(out, ".{}", fraction.trim_end_matches('0'))?;
            }
            out.push('S');
        }
        f.write_str(&out)
    }
}

impl fmt::Debug for ExactDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDuration({}ms)", self.0)
    }
}
