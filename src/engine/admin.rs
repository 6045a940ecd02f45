//! Administrative store workflows.
//!
//! These functions implement the admin screens' store-level semantics:
//! employee and shift lifecycle with explicit cascade batches, schedule
//! upserts keyed by (employee, date), and record corrections. The store
//! only ever sees single-document writes; every multi-document cascade is
//! issued here, one delete at a time.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, ScheduleEntry, Shift, StoreLocation};
use crate::store::AttendanceStore;

/// Creates an employee with a fresh opaque id.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmployee`] if the PIN is not exactly four
/// digits.
pub fn add_employee(
    store: &mut impl AttendanceStore,
    name: &str,
    pin: &str,
) -> EngineResult<Employee> {
    let employee = Employee::new(&Uuid::new_v4().to_string(), name, pin)?;
    store.put_employee(employee.clone());
    info!(employee_id = %employee.id, "Added employee");
    Ok(employee)
}

/// Replaces an existing employee's name and PIN.
///
/// The PIN invariant is enforced by the [`crate::models::Pin`] type the
/// caller had to construct.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] if no employee has this id.
pub fn update_employee(store: &mut impl AttendanceStore, employee: Employee) -> EngineResult<()> {
    if store.employee(&employee.id).is_none() {
        return Err(EngineError::EmployeeNotFound {
            employee_id: employee.id,
        });
    }
    store.put_employee(employee);
    Ok(())
}

/// Deletes an employee together with all dependent documents.
///
/// The cascade is a designed invariant: the employee's attendance records
/// and schedule entries are batch-deleted so no orphaned documents remain.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] if no employee has this id.
pub fn delete_employee(store: &mut impl AttendanceStore, employee_id: &str) -> EngineResult<()> {
    if !store.remove_employee(employee_id) {
        return Err(EngineError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        });
    }

    let records = store.records_for_employee(employee_id);
    for record in &records {
        store.remove_attendance_record(record.id);
    }

    let entries = store.schedule_for_employee(employee_id);
    for entry in &entries {
        store.remove_schedule_entry(employee_id, entry.date);
    }

    info!(
        employee_id,
        records_deleted = records.len(),
        entries_deleted = entries.len(),
        "Deleted employee and dependent documents"
    );
    Ok(())
}

/// Assigns a shift at a store to an employee for one date.
///
/// Upserts the `(employee, date)` schedule entry; assigning over an
/// existing entry replaces it, never duplicates it.
///
/// # Errors
///
/// Returns [`EngineError::ShiftNotFound`] or [`EngineError::StoreNotFound`]
/// if the referenced shift or store does not exist.
pub fn assign_shift(
    store: &mut impl AttendanceStore,
    employee_id: &str,
    date: NaiveDate,
    shift_id: &str,
    store_id: &str,
) -> EngineResult<()> {
    if store.shift(shift_id).is_none() {
        return Err(EngineError::ShiftNotFound {
            shift_id: shift_id.to_string(),
        });
    }
    if store.store_location(store_id).is_none() {
        return Err(EngineError::StoreNotFound {
            store_id: store_id.to_string(),
        });
    }

    store.put_schedule_entry(ScheduleEntry {
        employee_id: employee_id.to_string(),
        date,
        shift_id: shift_id.to_string(),
        store_id: store_id.to_string(),
    });
    Ok(())
}

/// Clears an employee's assignment for one date, if present.
///
/// "No shift" is the absence of an entry, so this is how a day is set to
/// off. Clearing an already-free day is a no-op.
pub fn clear_assignment(store: &mut impl AttendanceStore, employee_id: &str, date: NaiveDate) {
    store.remove_schedule_entry(employee_id, date);
}

/// Adds a new shift definition.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShift`] if the shift ends at or before
/// it starts. Shifts are same-day wall-clock windows; overnight shifts
/// are not supported.
pub fn add_shift(store: &mut impl AttendanceStore, shift: Shift) -> EngineResult<()> {
    validate_shift(&shift)?;
    store.put_shift(shift);
    Ok(())
}

/// Replaces an existing shift definition.
///
/// # Errors
///
/// Returns [`EngineError::ShiftNotFound`] if no shift has this id, and
/// [`EngineError::InvalidShift`] if the shift ends at or before it starts.
pub fn update_shift(store: &mut impl AttendanceStore, shift: Shift) -> EngineResult<()> {
    if store.shift(&shift.id).is_none() {
        return Err(EngineError::ShiftNotFound { shift_id: shift.id });
    }
    validate_shift(&shift)?;
    store.put_shift(shift);
    Ok(())
}

fn validate_shift(shift: &Shift) -> EngineResult<()> {
    if shift.end_time <= shift.start_time {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id.clone(),
            message: "ends at or before it starts".to_string(),
        });
    }
    Ok(())
}

/// Deletes a shift together with every schedule entry referencing it.
///
/// # Errors
///
/// Returns [`EngineError::ShiftNotFound`] if no shift has this id.
pub fn delete_shift(store: &mut impl AttendanceStore, shift_id: &str) -> EngineResult<()> {
    if !store.remove_shift(shift_id) {
        return Err(EngineError::ShiftNotFound {
            shift_id: shift_id.to_string(),
        });
    }

    let entries = store.schedule_for_shift(shift_id);
    for entry in &entries {
        store.remove_schedule_entry(&entry.employee_id, entry.date);
    }

    info!(
        shift_id,
        entries_deleted = entries.len(),
        "Deleted shift and dependent schedule entries"
    );
    Ok(())
}

/// Replaces an existing store location.
///
/// # Errors
///
/// Returns [`EngineError::StoreNotFound`] if no store has this id.
pub fn update_store_location(
    store: &mut impl AttendanceStore,
    location: StoreLocation,
) -> EngineResult<()> {
    if store.store_location(&location.id).is_none() {
        return Err(EngineError::StoreNotFound {
            store_id: location.id,
        });
    }
    store.put_store_location(location);
    Ok(())
}

/// Applies an admin correction to an attendance record.
///
/// # Errors
///
/// Returns [`EngineError::RecordNotFound`] if no record has this id, and
/// [`EngineError::InvalidRecord`] if the corrected clock-out would precede
/// the clock-in.
pub fn correct_attendance_record(
    store: &mut impl AttendanceStore,
    record: AttendanceRecord,
) -> EngineResult<()> {
    if store.attendance_record(record.id).is_none() {
        return Err(EngineError::RecordNotFound {
            record_id: record.id.to_string(),
        });
    }
    if let Some(clock_out) = record.clock_out {
        if clock_out < record.clock_in {
            return Err(EngineError::InvalidRecord {
                record_id: record.id.to_string(),
                message: "clock-out precedes clock-in".to_string(),
            });
        }
    }
    store.put_attendance_record(record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveTime;

    fn make_date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn make_shift(id: &str) -> Shift {
        Shift {
            id: id.to_string(),
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

    fn store_with_shift_and_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.put_shift(make_shift("FT-S"));
        store.put_store_location(StoreLocation {
            id: "store_1".to_string(),
            name: "Warehouse".to_string(),
            latitude: 21.03,
            longitude: 105.8,
        });
        store
    }

    #[test]
    fn test_add_employee_generates_id_and_validates_pin() {
        let mut store = MemoryStore::new();
        let employee = add_employee(&mut store, "Mai Pham", "1234").unwrap();
        assert!(!employee.id.is_empty());
        assert_eq!(store.employees().len(), 1);

        assert!(add_employee(&mut store, "Bad Pin", "12").is_err());
        assert_eq!(store.employees().len(), 1);
    }

    #[test]
    fn test_update_employee_requires_existing_id() {
        let mut store = MemoryStore::new();
        let missing = Employee::new("ghost", "Ghost", "0000").unwrap();
        assert!(matches!(
            update_employee(&mut store, missing),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_employee_cascades_records_and_schedule() {
        let mut store = store_with_shift_and_store();
        let employee = add_employee(&mut store, "Mai Pham", "1234").unwrap();

        assign_shift(&mut store, &employee.id, make_date(9), "FT-S", "store_1").unwrap();
        assign_shift(&mut store, &employee.id, make_date(10), "FT-S", "store_1").unwrap();
        store.put_attendance_record(AttendanceRecord::open(
            &employee.id,
            make_date(9).and_hms_opt(8, 0, 0).unwrap(),
            None,
        ));

        delete_employee(&mut store, &employee.id).unwrap();

        assert!(store.employee(&employee.id).is_none());
        assert!(store.records_for_employee(&employee.id).is_empty());
        assert!(store.schedule_for_employee(&employee.id).is_empty());
    }

    #[test]
    fn test_delete_employee_leaves_other_employees_alone() {
        let mut store = store_with_shift_and_store();
        let keep = add_employee(&mut store, "Keeper", "1111").unwrap();
        let gone = add_employee(&mut store, "Leaver", "2222").unwrap();
        assign_shift(&mut store, &keep.id, make_date(9), "FT-S", "store_1").unwrap();
        assign_shift(&mut store, &gone.id, make_date(9), "FT-S", "store_1").unwrap();

        delete_employee(&mut store, &gone.id).unwrap();

        assert!(store.employee(&keep.id).is_some());
        assert_eq!(store.schedule_for_employee(&keep.id).len(), 1);
    }

    #[test]
    fn test_assign_shift_upserts_single_entry_per_day() {
        let mut store = store_with_shift_and_store();
        store.put_shift(make_shift("PT-C"));
        let employee = add_employee(&mut store, "Mai Pham", "1234").unwrap();

        assign_shift(&mut store, &employee.id, make_date(9), "FT-S", "store_1").unwrap();
        assign_shift(&mut store, &employee.id, make_date(9), "PT-C", "store_1").unwrap();

        let entries = store.schedule_for_employee(&employee.id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].shift_id, "PT-C");
    }

    #[test]
    fn test_assign_shift_rejects_unknown_references() {
        let mut store = store_with_shift_and_store();
        assert!(matches!(
            assign_shift(&mut store, "emp", make_date(9), "missing", "store_1"),
            Err(EngineError::ShiftNotFound { .. })
        ));
        assert!(matches!(
            assign_shift(&mut store, "emp", make_date(9), "FT-S", "missing"),
            Err(EngineError::StoreNotFound { .. })
        ));
    }

    #[test]
    fn test_clear_assignment_removes_the_day() {
        let mut store = store_with_shift_and_store();
        let employee = add_employee(&mut store, "Mai Pham", "1234").unwrap();
        assign_shift(&mut store, &employee.id, make_date(9), "FT-S", "store_1").unwrap();

        clear_assignment(&mut store, &employee.id, make_date(9));
        assert!(store.schedule_entry(&employee.id, make_date(9)).is_none());

        // Clearing a free day is a no-op.
        clear_assignment(&mut store, &employee.id, make_date(9));
    }

    #[test]
    fn test_delete_shift_cascades_schedule_entries() {
        let mut store = store_with_shift_and_store();
        store.put_shift(make_shift("PT-C"));
        let employee = add_employee(&mut store, "Mai Pham", "1234").unwrap();
        assign_shift(&mut store, &employee.id, make_date(9), "FT-S", "store_1").unwrap();
        assign_shift(&mut store, &employee.id, make_date(10), "PT-C", "store_1").unwrap();

        delete_shift(&mut store, "FT-S").unwrap();

        assert!(store.shift("FT-S").is_none());
        let remaining = store.schedule_for_employee(&employee.id);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].shift_id, "PT-C");
    }

    #[test]
    fn test_add_shift_rejects_inverted_window() {
        let mut store = MemoryStore::new();
        let mut shift = make_shift("NG-1");
        shift.start_time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        shift.end_time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();

        assert!(matches!(
            add_shift(&mut store, shift),
            Err(EngineError::InvalidShift { .. })
        ));
        assert!(store.shifts().is_empty());
    }

    #[test]
    fn test_update_shift_requires_existing_id() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            update_shift(&mut store, make_shift("ghost")),
            Err(EngineError::ShiftNotFound { .. })
        ));

        add_shift(&mut store, make_shift("FT-S")).unwrap();
        let mut renamed = make_shift("FT-S");
        renamed.name = "Full-time early".to_string();
        update_shift(&mut store, renamed).unwrap();
        assert_eq!(store.shift("FT-S").unwrap().name, "Full-time early");
    }

    #[test]
    fn test_correct_attendance_record_rejects_inverted_times() {
        let mut store = MemoryStore::new();
        let day = make_date(9);
        let record = AttendanceRecord::open("emp_001", day.and_hms_opt(8, 0, 0).unwrap(), None);
        store.put_attendance_record(record.clone());

        let mut corrected = record.clone();
        corrected.clock_out = Some(day.and_hms_opt(7, 0, 0).unwrap());
        assert!(matches!(
            correct_attendance_record(&mut store, corrected),
            Err(EngineError::InvalidRecord { .. })
        ));

        let mut valid = record;
        valid.clock_out = Some(day.and_hms_opt(17, 0, 0).unwrap());
        correct_attendance_record(&mut store, valid.clone()).unwrap();
        assert_eq!(store.attendance_record(valid.id).unwrap(), valid);
    }

    #[test]
    fn test_correct_attendance_record_requires_existing_record() {
        let mut store = MemoryStore::new();
        let record =
            AttendanceRecord::open("emp_001", make_date(9).and_hms_opt(8, 0, 0).unwrap(), None);
        assert!(matches!(
            correct_attendance_record(&mut store, record),
            Err(EngineError::RecordNotFound { .. })
        ));
    }
}
