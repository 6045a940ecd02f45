//! Shift model and related types.
//!
//! This module defines the Shift struct: a named daily work window with
//! wall-clock start/end times and four independent grace periods that widen
//! the permitted clock-in/clock-out windows.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Serde helper for `"HH:MM"` wall-clock times.
///
/// Shift boundaries are stored without dates or seconds, matching the
/// scheduling screens that define them.
pub mod wall_clock {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// Serializes a [`NaiveTime`] as `"HH:MM"`.
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    /// Deserializes a [`NaiveTime`] from `"HH:MM"`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}

/// Represents a named daily work window.
///
/// Start and end are local wall-clock values with no date component; the
/// engine anchors them to a calendar day at evaluation time. The four grace
/// periods are independent and each defaults to 0 minutes when absent from
/// serialized input. Grace periods widen *permission* to clock, never the
/// zero-point of lateness.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Shift;
///
/// let json = r#"{
///     "id": "FT-S",
///     "name": "Full-time morning",
///     "short_name": "6:30-17:00",
///     "start_time": "06:30",
///     "end_time": "17:00",
///     "color": "bg-teal-200",
///     "clock_in_grace_before": 30,
///     "clock_in_grace_after": 10
/// }"#;
///
/// let shift: Shift = serde_json::from_str(json).unwrap();
/// assert_eq!(shift.clock_in_grace_before, 30);
/// // Unspecified grace periods default to 0.
/// assert_eq!(shift.clock_out_grace_after, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Full display name (e.g., "Full-time morning").
    pub name: String,
    /// Short label used in schedule grids and reports.
    pub short_name: String,
    /// Wall-clock start of the shift.
    #[serde(with = "wall_clock")]
    pub start_time: NaiveTime,
    /// Wall-clock end of the shift.
    #[serde(with = "wall_clock")]
    pub end_time: NaiveTime,
    /// Display color token for schedule screens.
    pub color: String,
    /// Minutes an employee may clock in before the shift starts.
    #[serde(default)]
    pub clock_in_grace_before: u32,
    /// Minutes an employee may clock in after the shift starts.
    #[serde(default)]
    pub clock_in_grace_after: u32,
    /// Minutes an employee may clock out before the shift ends.
    #[serde(default)]
    pub clock_out_grace_before: u32,
    /// Minutes an employee may clock out after the shift ends.
    #[serde(default)]
    pub clock_out_grace_after: u32,
}

impl Shift {
    /// Anchors the shift start to the given calendar day.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start_time)
    }

    /// Anchors the shift end to the given calendar day.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shift() -> Shift {
        Shift {
            id: "FT-S".to_string(),
            name: "Full-time morning".to_string(),
            short_name: "6:30-17:00".to_string(),
            start_time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            color: "bg-teal-200".to_string(),
            clock_in_grace_before: 30,
            clock_in_grace_after: 10,
            clock_out_grace_before: 10,
            clock_out_grace_after: 30,
        }
    }

    #[test]
    fn test_start_and_end_anchor_to_date() {
        let shift = make_shift();
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();

        assert_eq!(shift.start_on(date), date.and_hms_opt(6, 30, 0).unwrap());
        assert_eq!(shift.end_on(date), date.and_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn test_serialize_uses_wall_clock_format() {
        let shift = make_shift();
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"start_time\":\"06:30\""));
        assert!(json.contains("\"end_time\":\"17:00\""));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let shift = make_shift();
        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_grace_periods_default_to_zero() {
        let json = r#"{
            "id": "PT-C",
            "name": "Part-time afternoon",
            "short_name": "12:00-18:00",
            "start_time": "12:00",
            "end_time": "18:00",
            "color": "bg-amber-200"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.clock_in_grace_before, 0);
        assert_eq!(shift.clock_in_grace_after, 0);
        assert_eq!(shift.clock_out_grace_before, 0);
        assert_eq!(shift.clock_out_grace_after, 0);
    }

    #[test]
    fn test_deserialize_rejects_bad_wall_clock() {
        let json = r#"{
            "id": "PT-C",
            "name": "Part-time afternoon",
            "short_name": "12:00-18:00",
            "start_time": "noonish",
            "end_time": "18:00",
            "color": "bg-amber-200"
        }"#;

        assert!(serde_json::from_str::<Shift>(json).is_err());
    }
}
