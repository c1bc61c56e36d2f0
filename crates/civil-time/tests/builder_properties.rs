//! Property-based tests for the period builder
//!
//! ## Properties Verified
//!
//! - Non-negative offsets always build, with `start` at the clock reading
//! - Builds against a fixed clock are deterministic
//! - Sub-day offsets add exactly

use civil_core::{utc_zone, ExactDuration, Instant};
use civil_time::{FixedClock, PeriodBuilder};
use proptest::prelude::*;

fn arb_clock() -> impl Strategy<Value = FixedClock> {
    // 1900-01-01 .. 2100-01-01
    (-2_208_988_800_000i64..4_102_444_800_000)
        .prop_map(|millis| FixedClock::new(Instant::from_epoch_millis(millis).unwrap()))
}

fn arb_offsets() -> impl Strategy<Value = [i32; 7]> {
    [
        0i32..100,
        0i32..1200,
        0i32..10_000,
        0i32..100_000,
        0i32..1_000_000,
        0i32..10_000_000,
        0i32..100_000_000,
    ]
}

fn builder(offsets: [i32; 7]) -> PeriodBuilder {
    let [years, months, days, hours, minutes, seconds, millis] = offsets;
    PeriodBuilder::new()
        .years(years)
        .months(months)
        .days(days)
        .hours(hours)
        .minutes(minutes)
        .seconds(seconds)
        .milliseconds(millis)
}

proptest! {
    /// Property: non-negative offsets never end before now
    #[test]
    fn prop_non_negative_offsets_build(clock in arb_clock(), offsets in arb_offsets()) {
        let period = builder(offsets).build_with(&clock, utc_zone()).unwrap();
        prop_assert_eq!(period.start(), clock.at());
        prop_assert!(period.end() >= period.start());
    }

    /// Property: same clock, same offsets, same period
    #[test]
    fn prop_build_deterministic(clock in arb_clock(), offsets in arb_offsets()) {
        let first = builder(offsets).build_with(&clock, utc_zone()).unwrap();
        let second = builder(offsets).build_with(&clock, utc_zone()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: hours/minutes/seconds/millis are exact offsets
    #[test]
    fn prop_sub_day_offsets_exact(
        clock in arb_clock(),
        hours in 0i32..1000,
        minutes in 0i32..1000,
        seconds in 0i32..1000,
        millis in 0i32..1000,
    ) {
        let period = PeriodBuilder::new()
            .hours(hours)
            .minutes(minutes)
            .seconds(seconds)
            .milliseconds(millis)
            .build_with(&clock, utc_zone())
            .unwrap();

        let expected = ExactDuration::of_hours(hours.into())
            + ExactDuration::of_minutes(minutes.into())
            + ExactDuration::of_seconds(seconds.into())
            + ExactDuration::from_millis(millis.into());
        prop_assert_eq!(period.to_duration(), expected);
    }
}
