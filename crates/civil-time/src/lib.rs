//! Civil Time - clocks and "now"-anchored periods
//!
//! This crate implements the time sources around the civil values:
//! - Clock trait with system, fixed and manual clocks
//! - Period builder (now plus calendar offsets)
//! - Calendar configuration (zone and text patterns) and the calendar itself

pub mod builder;
pub mod calendar;
pub mod clock;

pub use builder::*;
pub use calendar::*;
pub use clock::*;
