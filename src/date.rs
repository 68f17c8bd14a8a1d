//! Calendar breakdown of epoch timestamps for display.

use chrono::{DateTime, Datelike, Month};

/// Year, month and day of a timestamp, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl CalendarDate {
    /// English month name, e.g. "November".
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

/// Break `timestamp_ms` (milliseconds since the Unix epoch) into a UTC
/// calendar date. UTC keeps the day stable regardless of viewer locale.
///
/// Returns `None` when the timestamp is outside chrono's representable range.
pub fn format_date(timestamp_ms: i64) -> Option<CalendarDate> {
    let date = DateTime::from_timestamp_millis(timestamp_ms)?.date_naive();
    let month = Month::try_from(u8::try_from(date.month()).ok()?).ok()?;
    Some(CalendarDate {
        year: date.year(),
        month,
        day: date.day(),
    })
}
