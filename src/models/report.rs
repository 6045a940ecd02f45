//! Report and status result models.
//!
//! These types capture the outputs of the report aggregator and the live
//! status queries. They are purely derived data: producing them never
//! mutates the underlying collections.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-employee punctuality summary for one calendar month.
///
/// Hour totals are IEEE-754 doubles; display rendering is two decimal
/// places. Counts only include records where the corresponding deviation
/// was actually present and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The summarized employee.
    pub employee_id: String,
    /// Display name at aggregation time.
    pub employee_name: String,
    /// Sum of worked hours over closed records (open records contribute 0).
    pub total_hours: f64,
    /// Sum of `late_hours` over records that have one.
    pub total_late_hours: f64,
    /// Sum of overtime hours (clock-out past shift end) over closed records.
    pub total_overtime_hours: f64,
    /// Number of records with a positive `late_hours`.
    pub late_count: u32,
    /// Number of closed records with clock-out strictly after shift end.
    pub overtime_count: u32,
    /// Number of records with a positive `early_leave_hours`.
    pub early_leave_count: u32,
}

/// Classification of one calendar day in the detail report.
///
/// Priority when several apply: attendance beats weekend beats an unworked
/// shift assignment beats having no schedule at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A record's clock-in falls on this day.
    HasAttendance,
    /// Saturday or Sunday with no attendance.
    WeekendNoShift,
    /// A schedule entry with a valid shift exists but was not worked.
    AbsentWithShift,
    /// No schedule entry for this day.
    NoScheduleAssigned,
}

impl DayStatus {
    /// Short status label for report cells.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::HasAttendance => "Attended",
            DayStatus::WeekendNoShift => "Weekend",
            DayStatus::AbsentWithShift => "Absent",
            DayStatus::NoScheduleAssigned => "No schedule",
        }
    }
}

/// One row of the per-day detail report.
///
/// Cells are display-ready: times as `"HH:MM"`, hour quantities to two
/// decimals, `"-"` where a value is absent or not applicable. The month's
/// report always contains exactly one row per calendar day, in ascending
/// date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDetail {
    /// The calendar day this row describes.
    pub date: NaiveDate,
    /// Day of week, for rendering the date cell.
    pub weekday: Weekday,
    /// Shift short name, `"-"` on a free weekend, `"Off"` otherwise.
    pub shift: String,
    /// Clock-in time or `"-"`.
    pub clock_in: String,
    /// Clock-out time or `"-"`.
    pub clock_out: String,
    /// Late hours to two decimals or `"-"`.
    pub late_hours: String,
    /// Early-leave hours to two decimals or `"-"`.
    pub early_leave_hours: String,
    /// Worked hours to two decimals or `"-"`.
    pub worked_hours: String,
    /// The day's classification.
    pub status: DayStatus,
}

/// Whether an employee currently has an open attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// The employee's latest record is open.
    ClockedIn,
    /// No open record.
    ClockedOut,
}

/// Direction of a clock event in the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A clock-in.
    In,
    /// A clock-out.
    Out,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// The attendance record the event belongs to.
    pub record_id: Uuid,
    /// The employee who clocked.
    pub employee_id: String,
    /// Display name at query time.
    pub employee_name: String,
    /// The event instant (clock-out when present, else clock-in).
    pub instant: NaiveDateTime,
    /// Whether the event was a clock-in or a clock-out.
    pub kind: ActivityKind,
}

/// One day of an employee's weekly schedule view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    /// The calendar day.
    pub date: NaiveDate,
    /// Short name of the assigned shift, if any.
    pub shift_short_name: Option<String>,
    /// Name of the assigned store, if any.
    pub store_name: Option<String>,
    /// Whether this day is the reference "today".
    pub is_today: bool,
}
