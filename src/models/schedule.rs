//! Schedule entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assigns an employee to a shift at a store for one calendar date.
///
/// The `(employee_id, date)` pair is the logical key: at most one entry
/// exists per employee per day, maintained by upsert. "No shift" for a day
/// is represented by the absence of an entry, not by a marker value.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ScheduleEntry;
/// use chrono::NaiveDate;
///
/// let entry = ScheduleEntry {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     shift_id: "FT-S".to_string(),
///     store_id: "store_1".to_string(),
/// };
/// assert_eq!(entry.date.to_string(), "2026-03-09");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The assigned employee.
    pub employee_id: String,
    /// The calendar date of the assignment (no time component).
    pub date: NaiveDate,
    /// The shift worked on that date.
    pub shift_id: String,
    /// The store the shift is worked at.
    pub store_id: String,
}
