//! Daily-slot scheduling and block-time model.
//!
//! Templates carry no timetable, so every template departs once a day at
//! the same local wall-clock time. Block time is derived from great-circle
//! distance and cruise speed.

use chrono::{DateTime, FixedOffset, NaiveTime, TimeDelta};

use crate::domain::{duration_from_minutes, from_local};

/// Next departure at `slot` local time that is strictly after `not_before`.
///
/// `not_before` may be in any offset; it is first converted to `local`.
/// If the slot has already passed (or is exactly now) on that local date,
/// the slot on the following day is used.
///
/// # Examples
///
/// ```
/// use skymesh::provider::next_departure;
/// use chrono::{DateTime, FixedOffset, NaiveTime};
///
/// let aest = FixedOffset::east_opt(10 * 3600).unwrap();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
///
/// let early = DateTime::parse_from_rfc3339("2026-03-01T08:00:00+10:00").unwrap();
/// assert_eq!(next_departure(early, aest, nine).to_rfc3339(), "2026-03-01T09:00:00+10:00");
///
/// let late = DateTime::parse_from_rfc3339("2026-03-01T09:30:00+10:00").unwrap();
/// assert_eq!(next_departure(late, aest, nine).to_rfc3339(), "2026-03-02T09:00:00+10:00");
/// ```
pub fn next_departure(
    not_before: DateTime<FixedOffset>,
    local: FixedOffset,
    slot: NaiveTime,
) -> DateTime<FixedOffset> {
    let local_now = not_before.with_timezone(&local);
    let candidate = from_local(local_now.date_naive().and_time(slot), local);

    if candidate > local_now {
        candidate
    } else {
        candidate + TimeDelta::days(1)
    }
}

/// Block time for a leg: cruise time plus a fixed ground buffer.
///
/// The buffer is added regardless of leg length.
pub fn block_time(distance_km: f64, cruise_speed_kmh: f64, ground_buffer_mins: f64) -> TimeDelta {
    let cruise_mins = distance_km / cruise_speed_kmh * 60.0;
    duration_from_minutes(cruise_mins + ground_buffer_mins)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The departure is after the request and at most a day later.
        #[test]
        fn within_one_day(
            secs in 1_700_000_000i64..1_900_000_000,
            offset_quarters in -48i32..=56,
            slot_mins in 0u32..1440,
        ) {
            let local = FixedOffset::east_opt(offset_quarters * 900).unwrap();
            let not_before = DateTime::from_timestamp(secs, 0).unwrap().fixed_offset();
            let slot = NaiveTime::from_hms_opt(slot_mins / 60, slot_mins % 60, 0).unwrap();

            let dep = next_departure(not_before, local, slot);

            prop_assert!(dep > not_before);
            prop_assert!(dep - not_before <= TimeDelta::days(1));
            prop_assert_eq!(dep.with_timezone(&local).time(), slot);
        }
    }
}
