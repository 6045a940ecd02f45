//! Live status and schedule-view queries.
//!
//! Pure reads over the store used by the kiosk: who is currently clocked
//! in, the recent activity feed, and an employee's week at a glance.

use chrono::{Duration, NaiveDate, Weekday};

use crate::models::{ActivityEvent, ActivityKind, EmployeeStatus, WeekDay};
use crate::store::AttendanceStore;

/// Whether an employee's latest attendance record is still open.
pub fn employee_status(store: &impl AttendanceStore, employee_id: &str) -> EmployeeStatus {
    let records = store.records_for_employee(employee_id);
    match records.iter().max_by_key(|r| r.clock_in) {
        Some(latest) if latest.is_open() => EmployeeStatus::ClockedIn,
        _ => EmployeeStatus::ClockedOut,
    }
}

/// The most recent clock events across all employees.
///
/// Each record contributes one event: a clock-out at its clock-out instant
/// when closed, else a clock-in at its clock-in instant. Events are
/// ordered newest first and truncated to `limit`. Records whose employee
/// no longer exists are skipped.
pub fn recent_activity(store: &impl AttendanceStore, limit: usize) -> Vec<ActivityEvent> {
    let mut events: Vec<ActivityEvent> = store
        .attendance_records()
        .into_iter()
        .filter_map(|record| {
            let employee = store.employee(&record.employee_id)?;
            let (instant, kind) = match record.clock_out {
                Some(out) => (out, ActivityKind::Out),
                None => (record.clock_in, ActivityKind::In),
            };
            Some(ActivityEvent {
                record_id: record.id,
                employee_id: record.employee_id,
                employee_name: employee.name,
                instant,
                kind,
            })
        })
        .collect();

    events.sort_by(|a, b| b.instant.cmp(&a.instant));
    events.truncate(limit);
    events
}

/// An employee's schedule for the week containing `today`.
///
/// Weeks start on Monday. Always returns exactly seven rows, one per day,
/// with the shift short name and store name resolved where an assignment
/// exists.
pub fn week_schedule(
    store: &impl AttendanceStore,
    employee_id: &str,
    today: NaiveDate,
) -> Vec<WeekDay> {
    let monday = today.week(Weekday::Mon).first_day();

    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            let entry = store.schedule_entry(employee_id, date);
            let shift_short_name = entry
                .as_ref()
                .and_then(|e| store.shift(&e.shift_id))
                .map(|s| s.short_name);
            let store_name = entry
                .as_ref()
                .and_then(|e| store.store_location(&e.store_id))
                .map(|s| s.name);
            WeekDay {
                date,
                shift_short_name,
                store_name,
                is_today: date == today,
            }
        })
        .collect()
}
