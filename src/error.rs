//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all conditions that can reject a clock action or fail an engine
//! operation. Every rejected clock attempt maps to exactly one variant;
//! none of them is fatal to the process.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Clock
/// rejections carry the context a kiosk needs for a user-facing message
/// (window bounds, measured distance).
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ShiftNotFound {
///     shift_id: "FT-S".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift not found: FT-S");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee has no schedule entry for the current date.
    #[error("No schedule for employee '{employee_id}' on {date}")]
    NoScheduleToday {
        /// The employee attempting the clock action.
        employee_id: String,
        /// The calendar date that has no schedule entry.
        date: NaiveDate,
    },

    /// A schedule entry references a shift that does not exist.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The shift id that could not be resolved.
        shift_id: String,
    },

    /// The clock action fell outside the permitted time window.
    #[error("Clocking only permitted between {} and {}", start.format("%H:%M"), end.format("%H:%M"))]
    OutsideTimeWindow {
        /// Start of the permitted window (inclusive).
        start: NaiveDateTime,
        /// End of the permitted window (inclusive).
        end: NaiveDateTime,
    },

    /// The scheduled store is missing or has no real coordinates assigned.
    #[error("Store '{store_id}' has no location assigned")]
    StoreLocationMissing {
        /// The store id from the schedule entry.
        store_id: String,
    },

    /// The device position could not be obtained within the allowed time.
    #[error("Could not obtain device position: {message}")]
    LocationUnavailable {
        /// A description of the provider failure (timeout, permission denial).
        message: String,
    },

    /// The device is outside the store's geofence.
    #[error("Outside store radius ({distance_meters}m away)")]
    OutsideGeofence {
        /// Measured distance to the store, rounded to the nearest meter.
        distance_meters: i64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift definition was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The id of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An employee id could not be resolved in the store.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: String,
    },

    /// An attendance record id could not be resolved in the store.
    #[error("Attendance record not found: {record_id}")]
    RecordNotFound {
        /// The record id that was not found.
        record_id: String,
    },

    /// An attendance record correction contained inconsistent data.
    #[error("Invalid attendance record '{record_id}': {message}")]
    InvalidRecord {
        /// The id of the invalid record.
        record_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A store id could not be resolved in the store collection.
    #[error("Store not found: {store_id}")]
    StoreNotFound {
        /// The store id that was not found.
        store_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_no_schedule_today_displays_employee_and_date() {
        let error = EngineError::NoScheduleToday {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No schedule for employee 'emp_001' on 2026-03-09"
        );
    }

    #[test]
    fn test_shift_not_found_displays_id() {
        let error = EngineError::ShiftNotFound {
            shift_id: "FT-S".to_string(),
        };
        assert_eq!(error.to_string(), "Shift not found: FT-S");
    }

    #[test]
    fn test_outside_time_window_displays_wall_clock_bounds() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let error = EngineError::OutsideTimeWindow {
            start: date.and_hms_opt(7, 30, 0).unwrap(),
            end: date.and_hms_opt(8, 10, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Clocking only permitted between 07:30 and 08:10"
        );
    }

    #[test]
    fn test_store_location_missing_displays_store_id() {
        let error = EngineError::StoreLocationMissing {
            store_id: "store_7".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Store 'store_7' has no location assigned"
        );
    }

    #[test]
    fn test_location_unavailable_displays_message() {
        let error = EngineError::LocationUnavailable {
            message: "position request timed out".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not obtain device position: position request timed out"
        );
    }

    #[test]
    fn test_outside_geofence_displays_rounded_distance() {
        let error = EngineError::OutsideGeofence {
            distance_meters: 734,
        };
        assert_eq!(error.to_string(), "Outside store radius (734m away)");
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "pin".to_string(),
            message: "must be exactly 4 digits".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'pin': must be exactly 4 digits"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/engine.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/engine.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_shift_not_found() -> EngineResult<()> {
            Err(EngineError::ShiftNotFound {
                shift_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_shift_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
