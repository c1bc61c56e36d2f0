//! Civil Core - immutable civil time values
//!
//! This crate defines the value types shared by the civil workspace:
//! - Instants (UTC-normalized, millisecond precision)
//! - Exact durations (elapsed time, no calendar ambiguity)
//! - Periods (closed intervals between two instants)
//! - Pattern presets for formatting and parsing
//!
//! Clocks and the period builder live in `civil-time`.

pub mod duration;
pub mod error;
pub mod instant;
pub mod pattern;
pub mod period;

pub use duration::*;
pub use error::*;
pub use instant::*;
pub use period::*;

pub use chrono::{FixedOffset, Weekday};
