//! Day-granularity date arithmetic.
//!
//! All schedule math goes through these helpers so that adding a duration
//! and diffing it back are exact inverses, independent of time zones.

use chrono::Days;

use crate::error::CoreError;
use crate::types::CalendarDate;

/// Wire format for calendar dates crossing the store/API boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Add `days` calendar days to `date`.
///
/// Returns `None` for negative `days` or when the result falls outside the
/// representable date range.
pub fn add_days(date: CalendarDate, days: i32) -> Option<CalendarDate> {
    let days = u64::try_from(days).ok()?;
    date.checked_add_days(Days::new(days))
}

/// Whole days from `start` to `end`. Negative when `end` precedes `start`.
pub fn days_between(start: CalendarDate, end: CalendarDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(value: &str) -> Result<CalendarDate, CoreError> {
    CalendarDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "Invalid date '{value}'. Expected YYYY-MM-DD format"
        ))
    })
}

/// Render a date in the `YYYY-MM-DD` wire format.
pub fn format_date(date: CalendarDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
