//! Clock sources for civil time
//!
//! A clock answers one question: what does the wall clock in zone Z read
//! right now? The answer is normalized into an [`Instant`].

use std::sync::Arc;

use parking_lot::Mutex;

use civil_core::{utc_zone, CivilResult, ExactDuration, FixedOffset, Instant};

/// Source of the current civil time
pub trait Clock: Send + Sync {
    /// Current wall-clock reading of `zone`, normalized.
    ///
    /// Fails with `CivilError::InvalidTimestamp` when the zone offset
    /// pushes the reading out of the representable range.
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant>;

    /// Current wall-clock reading of the normalization zone.
    fn now_utc(&self) -> CivilResult<Instant> {
        self.now(utc_zone())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant> {
        (**self).now(zone)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant> {
        (**self).now(zone)
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant> {
        (**self).now(zone)
    }
}

/// Operating system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant> {
        Instant::now(zone)
    }
}

/// Clock frozen at a single UTC reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    /// UTC reading
    at: Instant,
}

impl FixedClock {
    /// Freeze at `at`, read as UTC.
    pub fn new(at: Instant) -> Self {
        FixedClock { at }
    }

    pub fn at(&self) -> Instant {
        self.at
    }
}

impl Clock for FixedClock {
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant> {
        self.at.in_zone(zone)
    }
}

/// Clock that only moves when told to
///
/// Safe to share between threads; each read sees the latest `set`/`advance`.
#[derive(Debug)]
pub struct ManualClock {
    /// Current UTC reading
    current: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock starting at `start`, read as UTC.
    pub fn new(start: Instant) -> Self {
        ManualClock {
            current: Mutex::new(start),
        }
    }

    /// Jump to `at`, forwards or backwards.
    pub fn set(&self, at: Instant) {
        *self.current.lock() = at;
    }

    /// Move by `by` (negative moves backwards).
    /// Returns the new UTC reading.
    pub fn advance(&self, by: ExactDuration) -> CivilResult<Instant> {
        let mut current = self.current.lock();
        *current = current.add_duration(by)?;
        Ok(*current)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::EPOCH_ZERO)
    }
}

impl Clock for ManualClock {
    fn now(&self, zone: FixedOffset) -> CivilResult<Instant> {
        self.current.lock().in_zone(zone)
    }
}
