//! Punctuality deviation computation.
//!
//! Deviations are measured against the bare shift boundary on the calendar
//! day of the observed instant. They are not clamped by grace windows: an
//! employee can be inside the grace window and still be late by a few
//! minutes. A zero or negative deviation is reported as absent, so
//! aggregation can distinguish "not late" from a stored value.

use chrono::NaiveDateTime;

use crate::models::Shift;

/// Hours clocked in after shift start, on the instant's calendar day.
///
/// Returns `None` when the instant is at or before the shift start.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::Shift;
/// use attendance_engine::validation::late_hours;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = Shift {
///     id: "FT-S".to_string(),
///     name: "Morning".to_string(),
///     short_name: "8:00-17:00".to_string(),
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     color: "bg-sky-200".to_string(),
///     clock_in_grace_before: 30,
///     clock_in_grace_after: 30,
///     clock_out_grace_before: 0,
///     clock_out_grace_after: 0,
/// };
/// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
///
/// assert_eq!(late_hours(&shift, day.and_hms_opt(8, 15, 0).unwrap()), Some(0.25));
/// assert_eq!(late_hours(&shift, day.and_hms_opt(7, 45, 0).unwrap()), None);
/// assert_eq!(late_hours(&shift, day.and_hms_opt(8, 0, 0).unwrap()), None);
/// ```
pub fn late_hours(shift: &Shift, now: NaiveDateTime) -> Option<f64> {
    let seconds = (now - shift.start_on(now.date())).num_seconds();
    positive_hours(seconds)
}

/// Hours clocked out before shift end, on the instant's calendar day.
///
/// Returns `None` when the instant is at or after the shift end.
pub fn early_leave_hours(shift: &Shift, now: NaiveDateTime) -> Option<f64> {
    let seconds = (shift.end_on(now.date()) - now).num_seconds();
    positive_hours(seconds)
}

fn positive_hours(seconds: i64) -> Option<f64> {
    if seconds > 0 {
        Some(seconds as f64 / 3600.0)
    } else {
        None
    }
}
