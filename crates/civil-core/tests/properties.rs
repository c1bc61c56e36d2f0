//! Property-based tests for civil time values
//!
//! ## Properties Verified
//!
//! - Civil fields and epoch millis round-trip
//! - Instant ordering agrees with epoch millis
//! - Constructed periods keep `start <= end`; reversed pairs are rejected
//! - Containment is closed, overlap is symmetric
//! - Exact durations survive a trip through a period
//! - Exact day arithmetic is invertible

use civil_core::{CivilError, ExactDuration, Instant, Period};
use proptest::prelude::*;

// Years 0001..=9999 keep every generated value well inside chrono's range
const MIN_MILLIS: i64 = -62_135_596_800_000;
const MAX_MILLIS: i64 = 253_402_300_799_999;

fn arb_instant() -> impl Strategy<Value = Instant> {
    (MIN_MILLIS..=MAX_MILLIS).prop_map(|millis| Instant::from_epoch_millis(millis).unwrap())
}

fn arb_period() -> impl Strategy<Value = Period> {
    (arb_instant(), arb_instant()).prop_map(|(a, b)| a.to_period(b))
}

fn arb_civil() -> impl Strategy<Value = (i32, u32, u32, u32, u32, u32, u32)> {
    (
        1i32..=9999,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
}

proptest! {
    /// Property: civil fields read back unchanged
    #[test]
    fn prop_civil_roundtrip(fields in arb_civil()) {
        let (year, month, day, hour, minute, second, milli) = fields;
        let instant = Instant::from_civil(year, month, day, hour, minute, second, milli).unwrap();

        prop_assert_eq!(
            (
                instant.year(),
                instant.month(),
                instant.day(),
                instant.hour(),
                instant.minute(),
                instant.second(),
                instant.millisecond(),
            ),
            fields
        );
    }

    /// Property: epoch millis read back unchanged
    #[test]
    fn prop_epoch_roundtrip(millis in MIN_MILLIS..=MAX_MILLIS) {
        let instant = Instant::from_epoch_millis(millis).unwrap();
        prop_assert_eq!(instant.epoch_millis(), millis);
    }

    /// Property: ordering is total and agrees with epoch millis
    #[test]
    fn prop_ordering_matches_millis(a in arb_instant(), b in arb_instant()) {
        prop_assert_eq!(a.cmp(&b), a.epoch_millis().cmp(&b.epoch_millis()));

        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
    }

    /// Property: strict construction accepts ordered pairs only
    #[test]
    fn prop_period_invariant(a in arb_instant(), b in arb_instant()) {
        match Period::new(a, b) {
            Ok(period) => prop_assert!(period.start() <= period.end()),
            Err(err) => {
                prop_assert!(a > b);
                prop_assert_eq!(err, CivilError::InvalidPeriod { start: a, end: b });
            }
        }
    }

    /// Property: both endpoints are contained
    #[test]
    fn prop_contains_endpoints(period in arb_period()) {
        prop_assert!(period.contains(period.start()));
        prop_assert!(period.contains(period.end()));
    }

    /// Property: overlap is symmetric
    #[test]
    fn prop_overlap_symmetric(p in arb_period(), q in arb_period()) {
        prop_assert_eq!(p.overlaps(&q), q.overlaps(&p));
    }

    /// Property: a period built from a non-negative duration reports it back
    #[test]
    fn prop_duration_additivity(
        start in arb_instant(),
        millis in 0i64..=10 * 366 * 86_400_000,
    ) {
        let duration = ExactDuration::from_millis(millis);
        if let Ok(period) = Period::from_duration(start, duration) {
            prop_assert_eq!(period.to_duration(), duration);
            prop_assert_eq!(ExactDuration::from(&period), duration);
        }
    }

    /// Property: adding then removing days is the identity
    #[test]
    fn prop_add_days_invertible(instant in arb_instant(), days in -3_000_000i64..=3_000_000) {
        if let Ok(shifted) = instant.add_days(days) {
            prop_assert_eq!(shifted.add_days(-days).unwrap(), instant);
        }
    }

    /// Property: zero_time lands on midnight of the same civil date
    #[test]
    fn prop_zero_time_same_date(instant in arb_instant()) {
        let midnight = instant.zero_time();
        prop_assert_eq!(midnight.to_date(), instant.to_date());
        prop_assert_eq!((midnight.hour(), midnight.minute(), midnight.second()), (0, 0, 0));
        prop_assert!(midnight <= instant);
    }
}
