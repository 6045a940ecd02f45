//! Monthly summary aggregation.

use chrono::Datelike;

use crate::models::{AttendanceRecord, Employee, MonthlySummary, ScheduleEntry, Shift};

/// Summarizes one employee's attendance for a calendar month.
///
/// Records are selected by their `clock_in` falling in the month. Within
/// the selection:
///
/// - `total_hours` sums clock-in to clock-out over closed records; open
///   records contribute 0.
/// - `total_late_hours`/`late_count` accumulate only records that carry a
///   positive `late_hours`; an absent deviation is skipped, never treated
///   as 0.
/// - `early_leave_count` counts records with a positive
///   `early_leave_hours`.
/// - overtime is derived per closed record from that day's schedule entry
///   and shift: hours of clock-out past the shift end (anchored to the
///   clock-out's calendar date), counted only when strictly positive.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, Employee};
/// use attendance_engine::report::monthly_summary;
/// use chrono::NaiveDate;
///
/// let employee = Employee::new("emp_001", "Mai Pham", "1234").unwrap();
/// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// let mut record =
///     AttendanceRecord::open("emp_001", day.and_hms_opt(8, 15, 0).unwrap(), Some(0.25));
/// record.close(day.and_hms_opt(17, 0, 0).unwrap(), None);
///
/// let summary = monthly_summary(&employee, &[record], &[], &[], 2026, 3);
/// assert_eq!(summary.total_hours, 8.75);
/// assert_eq!(summary.total_late_hours, 0.25);
/// assert_eq!(summary.late_count, 1);
/// assert_eq!(summary.overtime_count, 0);
/// ```
pub fn monthly_summary(
    employee: &Employee,
    records: &[AttendanceRecord],
    schedule: &[ScheduleEntry],
    shifts: &[Shift],
    year: i32,
    month: u32,
) -> MonthlySummary {
    let mut summary = MonthlySummary {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        total_hours: 0.0,
        total_late_hours: 0.0,
        total_overtime_hours: 0.0,
        late_count: 0,
        overtime_count: 0,
        early_leave_count: 0,
    };

    let in_month = records.iter().filter(|r| {
        r.employee_id == employee.id
            && r.clock_in.date().year() == year
            && r.clock_in.date().month() == month
    });

    for record in in_month {
        if let Some(worked) = record.worked_hours() {
            summary.total_hours += worked;
        }

        if let Some(late) = record.late_hours {
            if late > 0.0 {
                summary.total_late_hours += late;
                summary.late_count += 1;
            }
        }

        if let Some(early) = record.early_leave_hours {
            if early > 0.0 {
                summary.early_leave_count += 1;
            }
        }

        if let Some(overtime) = overtime_hours(record, schedule, shifts) {
            summary.total_overtime_hours += overtime;
            summary.overtime_count += 1;
        }
    }

    summary
}

/// Summarizes every employee for a calendar month, in input order.
pub fn monthly_summaries(
    employees: &[Employee],
    records: &[AttendanceRecord],
    schedule: &[ScheduleEntry],
    shifts: &[Shift],
    year: i32,
    month: u32,
) -> Vec<MonthlySummary> {
    employees
        .iter()
        .map(|employee| monthly_summary(employee, records, schedule, shifts, year, month))
        .collect()
}

/// Overtime for one closed record: clock-out past the shift end.
///
/// The shift end is anchored to the clock-out's calendar date. Returns
/// `None` for open records, days without a resolvable schedule entry and
/// shift, and clock-outs at or before the shift end. Independent of
/// `early_leave_hours`: the same shift-end boundary cannot produce both.
fn overtime_hours(
    record: &AttendanceRecord,
    schedule: &[ScheduleEntry],
    shifts: &[Shift],
) -> Option<f64> {
    let clock_out = record.clock_out?;
    let entry = schedule.iter().find(|e| {
        e.employee_id == record.employee_id && e.date == record.clock_in.date()
    })?;
    let shift = shifts.iter().find(|s| s.id == entry.shift_id)?;

    let shift_end = shift.end_on(clock_out.date());
    let seconds = (clock_out - shift_end).num_seconds();
    if seconds > 0 {
        Some(seconds as f64 / 3600.0)
    } else {
        None
    }
}
