//! Permitted clock window computation.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Shift;

/// The direction of a clock action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockAction {
    /// Opening an attendance record at the start of a shift.
    ClockIn,
    /// Closing the open attendance record at the end of a shift.
    ClockOut,
}

/// The interval during which a clock action is permitted.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockWindow {
    /// Earliest permitted instant.
    pub start: NaiveDateTime,
    /// Latest permitted instant.
    pub end: NaiveDateTime,
}

impl ClockWindow {
    /// Returns true if the instant falls inside the window, bounds included.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Computes the permitted window for an action on a calendar day.
///
/// Clock-in is permitted in `[shift start - grace before, shift start +
/// grace after]`; clock-out in `[shift end - grace before, shift end +
/// grace after]`, with the shift boundaries anchored to `date`.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::Shift;
/// use attendance_engine::validation::{ClockAction, permitted_window};
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
///     clock_in_grace_after: 10,
///     clock_out_grace_before: 10,
///     clock_out_grace_after: 30,
/// };
/// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
///
/// let window = permitted_window(&shift, ClockAction::ClockIn, day);
/// assert_eq!(window.start, day.and_hms_opt(7, 30, 0).unwrap());
/// assert_eq!(window.end, day.and_hms_opt(8, 10, 0).unwrap());
/// ```
pub fn permitted_window(shift: &Shift, action: ClockAction, date: NaiveDate) -> ClockWindow {
    let (anchor, grace_before, grace_after) = match action {
        ClockAction::ClockIn => (
            shift.start_on(date),
            shift.clock_in_grace_before,
            shift.clock_in_grace_after,
        ),
        ClockAction::ClockOut => (
            shift.end_on(date),
            shift.clock_out_grace_before,
            shift.clock_out_grace_after,
        ),
    };

    ClockWindow {
        start: anchor - Duration::minutes(i64::from(grace_before)),
        end: anchor + Duration::minutes(i64::from(grace_after)),
    }
}

/// Checks an instant against the permitted window for an action.
///
/// The window is anchored to the instant's own calendar day. A rejection
/// carries the computed bounds so the caller can render a user-facing
/// message.
///
/// # Errors
///
/// Returns [`EngineError::OutsideTimeWindow`] when the instant falls
/// outside the inclusive window.
pub fn check_window(shift: &Shift, action: ClockAction, now: NaiveDateTime) -> EngineResult<()> {
    let window = permitted_window(shift, action, now.date());
    if window.contains(now) {
        Ok(())
    } else {
        Err(EngineError::OutsideTimeWindow {
            start: window.start,
            end: window.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_shift() -> Shift {
        Shift {
            id: "FT-S".to_string(),
            name: "Morning".to_string(),
            short_name: "8:00-17:00".to_string(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            color: "bg-sky-200".to_string(),
            clock_in_grace_before: 30,
            clock_in_grace_after: 10,
            clock_out_grace_before: 10,
            clock_out_grace_after: 30,
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_clock_in_window_bounds() {
        let window = permitted_window(
            &make_shift(),
            ClockAction::ClockIn,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        );
        assert_eq!(window.start, at(7, 30));
        assert_eq!(window.end, at(8, 10));
    }

    #[test]
    fn test_clock_out_window_bounds() {
        let window = permitted_window(
            &make_shift(),
            ClockAction::ClockOut,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        );
        assert_eq!(window.start, at(16, 50));
        assert_eq!(window.end, at(17, 30));
    }

    /// 08:00-17:00 shift, grace 30 before / 10 after: both bounds are
    /// inclusive and one minute past either bound is rejected.
    #[test]
    fn test_clock_in_at_window_edges() {
        let shift = make_shift();
        assert!(check_window(&shift, ClockAction::ClockIn, at(7, 30)).is_ok());
        assert!(check_window(&shift, ClockAction::ClockIn, at(8, 10)).is_ok());
        assert!(check_window(&shift, ClockAction::ClockIn, at(7, 29)).is_err());
        assert!(check_window(&shift, ClockAction::ClockIn, at(8, 11)).is_err());
    }

    #[test]
    fn test_clock_in_within_grace_after_succeeds() {
        // 08:05 is late relative to shift start but inside the grace window.
        assert!(check_window(&make_shift(), ClockAction::ClockIn, at(8, 5)).is_ok());
    }

    #[test]
    fn test_rejection_carries_window_bounds() {
        let err = check_window(&make_shift(), ClockAction::ClockIn, at(7, 29)).unwrap_err();
        match err {
            EngineError::OutsideTimeWindow { start, end } => {
                assert_eq!(start, at(7, 30));
                assert_eq!(end, at(8, 10));
            }
            other => panic!("expected OutsideTimeWindow, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_grace_permits_only_the_boundary_instant() {
        let mut shift = make_shift();
        shift.clock_in_grace_before = 0;
        shift.clock_in_grace_after = 0;

        assert!(check_window(&shift, ClockAction::ClockIn, at(8, 0)).is_ok());
        assert!(check_window(&shift, ClockAction::ClockIn, at(7, 59)).is_err());
        assert!(check_window(&shift, ClockAction::ClockIn, at(8, 1)).is_err());
    }

    #[test]
    fn test_window_anchors_to_the_instants_day() {
        let shift = make_shift();
        let other_day = NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert!(check_window(&shift, ClockAction::ClockIn, other_day).is_ok());
    }
}
