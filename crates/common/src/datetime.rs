//! DateTime utilities.
//!
//! This module provides helper functions for working with dates and times.

use chrono::{DateTime, Utc};

/// Get the current UTC time.
///
/// # Examples
///
/// ```
/// use community_events_common::datetime::now_utc;
///
/// let now = now_utc();
/// println!("Current time: {}", now);
/// ```
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Check if a datetime is in the past.
///
/// # Examples
///
/// ```
/// use community_events_common::datetime::{now_utc, is_past};
/// use chrono::Duration;
///
/// let past = now_utc() - Duration::hours(1);
/// assert!(is_past(&past));
///
/// let future = now_utc() + Duration::hours(1);
/// assert!(!is_past(&future));
/// ```
pub fn is_past(datetime: &DateTime<Utc>) -> bool {
    datetime < &now_utc()
}

/// Check if a datetime is in the future.
///
/// # Examples
///
/// ```
/// use community_events_common::datetime::{now_utc, is_future};
/// use chrono::Duration;
///
/// let future = now_utc() + Duration::hours(1);
/// assert!(is_future(&future));
///
/// let past = now_utc() - Duration::hours(1);
/// assert!(!is_future(&past));
/// ```
pub fn is_future(datetime: &DateTime<Utc>) -> bool {
    datetime > &now_utc()
}

/// Check whether two instants fall on the same UTC calendar day.
///
/// # Examples
///
/// ```
/// use community_events_common::datetime::same_calendar_day;
/// use chrono::{TimeZone, Utc};
///
/// let morning = Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap();
/// let evening = Utc.with_ymd_and_hms(2025, 6, 10, 21, 0, 0).unwrap();
/// assert!(same_calendar_day(&morning, &evening));
/// ```
pub fn same_calendar_day(a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}
