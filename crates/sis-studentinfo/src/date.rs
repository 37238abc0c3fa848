//! Date helpers

use chrono::NaiveDate;

/// Build a calendar date from a year, 1-based month and day.
///
/// Returns `None` for dates that do not exist (e.g. February 30).
pub fn create_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
