//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for provider tenure, event times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Build a UTC timestamp for midnight of the given calendar date.
///
/// Returns `None` for dates that do not exist (e.g. 2023-02-30).
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> Option<Timestamp> {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
