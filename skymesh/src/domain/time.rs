//! Time helpers for timezone-aware flight scheduling.
//!
//! Flights are stored as `DateTime<FixedOffset>`: an absolute instant paired
//! with the offset it should be displayed in. Comparisons and subtraction
//! between two such values always act on the underlying instants, so
//! durations across zones come out right without converting to UTC first.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

/// Interpret a wall-clock time under a fixed offset.
///
/// Fixed offsets have no gaps or folds, so every local time maps to exactly
/// one instant.
///
/// # Examples
///
/// ```
/// use skymesh::domain::from_local;
/// use chrono::{FixedOffset, NaiveDate};
///
/// let aest = FixedOffset::east_opt(10 * 3600).unwrap();
/// let local = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
///
/// let instant = from_local(local, aest);
/// assert_eq!(instant.to_rfc3339(), "2026-03-01T09:00:00+10:00");
/// ```
pub fn from_local(local: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Convert fractional minutes to a duration with microsecond precision.
pub fn duration_from_minutes(minutes: f64) -> TimeDelta {
    TimeDelta::microseconds((minutes * 60_000_000.0).round() as i64)
}

/// Returns the duration as fractional hours.
pub fn duration_hours(duration: TimeDelta) -> f64 {
    let seconds = duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) * 1e-9;
    seconds / 3600.0
}

/// Format a duration as "Xh Ym", truncating seconds.
///
/// # Examples
///
/// ```
/// use skymesh::domain::format_duration;
/// use chrono::TimeDelta;
///
/// assert_eq!(format_duration(TimeDelta::minutes(95)), "1h 35m");
/// assert_eq!(format_duration(TimeDelta::minutes(-30)), "-0h 30m");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    format!("{sign}{}h {}m", total_minutes / 60, total_minutes % 60)
}
