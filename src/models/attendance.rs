//! Attendance record model.
//!
//! An attendance record is opened by a successful clock-in and closed by a
//! successful clock-out. At most one open record exists per employee at any
//! time; the store's open-record query is the uniqueness check callers run
//! immediately before mutation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One clock-in/clock-out pair for an employee.
///
/// `late_hours` and `early_leave_hours` are deviations relative to the
/// shift boundaries, recorded only when strictly positive. `None` means
/// "not late" / "not early", which aggregation must never conflate with a
/// numeric zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The clock-in instant.
    pub clock_in: NaiveDateTime,
    /// The clock-out instant; `None` while the record is open.
    pub clock_out: Option<NaiveDateTime>,
    /// Hours clocked in after shift start, when positive.
    pub late_hours: Option<f64>,
    /// Hours clocked out before shift end, when positive.
    pub early_leave_hours: Option<f64>,
}

impl AttendanceRecord {
    /// Opens a new record at the given clock-in instant.
    pub fn open(employee_id: &str, clock_in: NaiveDateTime, late_hours: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            clock_in,
            clock_out: None,
            late_hours,
            early_leave_hours: None,
        }
    }

    /// Closes the record at the given clock-out instant.
    ///
    /// Callers guarantee `clock_out >= clock_in`; the engine only closes
    /// records with instants it observed after opening them.
    pub fn close(&mut self, clock_out: NaiveDateTime, early_leave_hours: Option<f64>) {
        debug_assert!(clock_out >= self.clock_in);
        self.clock_out = Some(clock_out);
        self.early_leave_hours = early_leave_hours;
    }

    /// Returns true while the record has no clock-out.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Worked duration in hours, or `None` while the record is open.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::AttendanceRecord;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
    /// let mut record =
    ///     AttendanceRecord::open("emp_001", day.and_hms_opt(8, 0, 0).unwrap(), None);
    /// assert_eq!(record.worked_hours(), None);
    ///
    /// record.close(day.and_hms_opt(17, 30, 0).unwrap(), None);
    /// assert_eq!(record.worked_hours(), Some(9.5));
    /// ```
    pub fn worked_hours(&self) -> Option<f64> {
        self.clock_out
            .map(|out| (out - self.clock_in).num_seconds() as f64 / 3600.0)
    }
}
