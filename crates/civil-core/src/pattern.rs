//! Date/time pattern presets and validation
//!
//! Patterns use the strftime-style grammar of `chrono::format::strftime`.

use chrono::format::{Item, StrftimeItems};

use crate::{CivilError, CivilResult};

/// Day-first civil date (`31/01/2024`)
pub const DATE_PATTERN: &str = "%d/%m/%Y";

/// Time of day with seconds (`23:59:59`)
pub const TIME_PATTERN: &str = "%H:%M:%S";

/// Day-first civil date-time (`31/01/2024 23:59:59`)
pub const DATE_TIME_PATTERN: &str = "%d/%m/%Y %H:%M:%S";

/// ISO-8601 calendar date (`2024-01-31`)
pub const ISO_DATE_PATTERN: &str = "%Y-%m-%d";

/// ISO-8601 local date-time with milliseconds (`2024-01-31T23:59:59.999`)
pub const ISO_DATE_TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Compile a pattern, rejecting unknown or malformed specifiers.
pub(crate) fn compile(pattern: &str) -> CivilResult<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::debug!(pattern, "rejected date/time pattern");
        return Err(CivilError::InvalidPattern(pattern.to_string()));
    }
    Ok(items)
}

/// Check that a pattern only uses specifiers the formatter understands.
///
/// Offset specifiers such as `%z` compile but still fail when rendering an
/// instant, which carries no offset; those surface from
/// [`Instant::format`](crate::Instant::format) instead.
pub fn check(pattern: &str) -> CivilResult<()> {
    compile(pattern).map(|_| ())
}
