//! Period - a closed interval `[start, end]` between two instants

use std::fmt;

use chrono::{Datelike, NaiveDateTime};

use crate::instant::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MILLIS_PER_WEEK,
};
use crate::{CivilError, CivilResult, ExactDuration, Instant};

/// Closed interval of instants.
///
/// INVARIANT: `start <= end`. Periods order by `start`, then by `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    start: Instant,
    end: Instant,
}

impl Period {
    /// Strict constructor: fails with [`CivilError::InvalidPeriod`] when
    /// `start` is after `end`. Use [`Instant::to_period`] to order a pair.
    pub fn new(start: Instant, end: Instant) -> CivilResult<Self> {
        if start > end {
            tracing::debug!(%start, %end, "rejected period with start after end");
            return Err(CivilError::InvalidPeriod { start, end });
        }
        Ok(Period { start, end })
    }

    /// Period from `start` lasting exactly `duration`.
    pub fn from_duration(start: Instant, duration: ExactDuration) -> CivilResult<Self> {
        let end = start.add_duration(duration)?;
        Period::new(start, end)
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn ordered(start: Instant, end: Instant) -> Self {
        debug_assert!(start <= end);
        Period { start, end }
    }

    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    #[inline]
    pub fn to_duration(&self) -> ExactDuration {
        self.end - self.start
    }

    // Exact units

    #[inline]
    pub fn duration_in_millis(&self) -> i64 {
        self.to_duration().to_millis()
    }

    pub fn duration_in_seconds(&self) -> i64 {
        self.duration_in_millis() / MILLIS_PER_SECOND
    }

    pub fn duration_in_minutes(&self) -> i64 {
        self.duration_in_millis() / MILLIS_PER_MINUTE
    }

    pub fn duration_in_hours(&self) -> i64 {
        self.duration_in_millis() / MILLIS_PER_HOUR
    }

    pub fn duration_in_days(&self) -> i64 {
        self.duration_in_millis() / MILLIS_PER_DAY
    }

    pub fn duration_in_weeks(&self) -> i64 {
        self.duration_in_millis() / MILLIS_PER_WEEK
    }

    // Calendar units

    /// Whole calendar months elapsed.
    ///
    /// A month counts once the end reaches the start's day-of-month and
    /// time-of-day, so 01-31 to 02-29 is zero months and 01-15 to 02-15 is one.
    pub fn duration_in_months(&self) -> i64 {
        whole_months(self.start.to_naive(), self.end.to_naive())
    }

    pub fn duration_in_years(&self) -> i64 {
        self.duration_in_months() / 12
    }

    // Queries

    /// Closed on both ends.
    #[inline]
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// True when the intervals share at least one instant, including a
    /// single shared boundary.
    #[inline]
    pub fn overlaps(&self, other: &Period) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    pub fn is_longer(&self, other: &Period) -> bool {
        self.duration_in_millis() > other.duration_in_millis()
    }

    pub fn is_longer_or_equal(&self, other: &Period) -> bool {
        self.duration_in_millis() >= other.duration_in_millis()
    }

    pub fn is_shorter(&self, other: &Period) -> bool {
        self.duration_in_millis() < other.duration_in_millis()
    }

    pub fn is_shorter_or_equal(&self, other: &Period) -> bool {
        self.duration_in_millis() <= other.duration_in_millis()
    }

    // Shifts

    pub fn shift_days(&self, days: i64) -> CivilResult<Period> {
        Period::new(self.start.add_days(days)?, self.end.add_days(days)?)
    }

    pub fn shift_weeks(&self, weeks: i64) -> CivilResult<Period> {
        Period::new(self.start.add_weeks(weeks)?, self.end.add_weeks(weeks)?)
    }

    /// Both endpoints move by calendar months; clamping can shorten the period.
    pub fn shift_months(&self, months: i64) -> CivilResult<Period> {
        Period::new(self.start.add_months(months)?, self.end.add_months(months)?)
    }

    pub fn shift_years(&self, years: i64) -> CivilResult<Period> {
        Period::new(self.start.add_years(years)?, self.end.add_years(years)?)
    }

    /// Move only the end by `days`. Shrinking past the start fails.
    pub fn extend(&self, days: i64) -> CivilResult<Period> {
        Period::new(self.start, self.end.add_days(days)?)
    }
}

/// Whole months from `start` to `end`, `start <= end`.
fn whole_months(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut end_date = end.date();
    // an incomplete final day does not count toward the final month
    if end_date > start.date() && end.time() < start.time() {
        end_date = end_date.pred_opt().unwrap_or(end_date);
    }
    let start_date = start.date();

    let months = |d: chrono::NaiveDate| d.year() as i64 * 12 + d.month0() as i64;
    let mut total = months(end_date) - months(start_date);
    if total > 0 && end_date.day() < start_date.day() {
        total -= 1;
    }
    total
}

impl From<Period> for (Instant, Instant) {
    fn from(period: Period) -> Self {
        (period.start, period.end)
    }
}

impl TryFrom<(Instant, Instant)> for Period {
    type Error = CivilError;

    fn try_from((start, end): (Instant, Instant)) -> Result<Self, Self::Error> {
        Period::new(start, end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl fmt::Debug for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Period({:?}..={:?})", self.start, self.end)
    }
}
