//! Error types for civil time values

use std::fmt;

use thiserror::Error;

use crate::Instant;

/// Civil field named by an [`CivilError::InvalidCivilField`] error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CivilField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl fmt::Display for CivilField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CivilField::Year => "year",
            CivilField::Month => "month",
            CivilField::Day => "day",
            CivilField::Hour => "hour",
            CivilField::Minute => "minute",
            CivilField::Second => "second",
            CivilField::Millisecond => "millisecond",
        };
        f.write_str(name)
    }
}

/// Civil time errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CivilError {
    // Construction errors
    #[error("Invalid timestamp: {0}ms cannot be represented as a civil date-time")]
    InvalidTimestamp(i64),

    #[error("Invalid civil field: {field} = {value}")]
    InvalidCivilField { field: CivilField, value: i64 },

    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod { start: Instant, end: Instant },

    #[error("Duration overflow")]
    DurationOverflow,

    // Text errors
    #[error("Cannot parse {input:?} with pattern {pattern:?}: {reason}")]
    ParseError {
        input: String,
        pattern: String,
        reason: String,
    },

    #[error("Invalid pattern: {0:?}")]
    InvalidPattern(String),

    // Configuration errors
    #[error("Invalid zone offset: {0}s")]
    InvalidZone(i32),
}

/// Result type for civil time operations
pub type CivilResult<T> = Result<T, CivilError>;
