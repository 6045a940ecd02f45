//! Per-day detail report.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{AttendanceRecord, DayDetail, DayStatus, ScheduleEntry, Shift};

/// Builds the per-day detail sheet for one employee and month.
///
/// Emits exactly one row per calendar day of the month, in ascending date
/// order, regardless of data availability. Each day is classified by
/// priority: attendance beats weekend beats an unworked shift assignment
/// beats having no schedule. Cells are display-ready, `"-"` where a value
/// is absent.
///
/// Months outside 1..=12 yield an empty report.
pub fn daily_details(
    employee_id: &str,
    records: &[AttendanceRecord],
    schedule: &[ScheduleEntry],
    shifts: &[Shift],
    year: i32,
    month: u32,
) -> Vec<DayDetail> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let mut date = first;
    while date.month() == month {
        rows.push(day_row(employee_id, date, records, schedule, shifts));
        date += Duration::days(1);
    }
    rows
}

fn day_row(
    employee_id: &str,
    date: NaiveDate,
    records: &[AttendanceRecord],
    schedule: &[ScheduleEntry],
    shifts: &[Shift],
) -> DayDetail {
    let weekday = date.weekday();
    let is_weekend = weekday == Weekday::Sat || weekday == Weekday::Sun;

    let shift = schedule
        .iter()
        .find(|e| e.employee_id == employee_id && e.date == date)
        .and_then(|entry| shifts.iter().find(|s| s.id == entry.shift_id));

    let record = records
        .iter()
        .find(|r| r.employee_id == employee_id && r.clock_in.date() == date);

    let status = if record.is_some() {
        DayStatus::HasAttendance
    } else if is_weekend {
        DayStatus::WeekendNoShift
    } else if shift.is_some() {
        DayStatus::AbsentWithShift
    } else {
        DayStatus::NoScheduleAssigned
    };

    let shift_cell = match shift {
        Some(shift) => shift.short_name.clone(),
        None if is_weekend => "-".to_string(),
        None => "Off".to_string(),
    };

    DayDetail {
        date,
        weekday,
        shift: shift_cell,
        clock_in: record
            .map(|r| r.clock_in.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string()),
        clock_out: record
            .and_then(|r| r.clock_out)
            .map(|out| out.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string()),
        late_hours: hours_cell(record.and_then(|r| r.late_hours)),
        early_leave_hours: hours_cell(record.and_then(|r| r.early_leave_hours)),
        worked_hours: hours_cell(record.and_then(|r| r.worked_hours())),
        status,
    }
}

/// Two-decimal rendering for positive hour quantities; `"-"` otherwise.
fn hours_cell(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h > 0.0 => format!("{:.2}", h),
        _ => "-".to_string(),
    }
}
