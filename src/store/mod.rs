//! Persistence store contract.
//!
//! The engine consumes persistence as an abstract store over five
//! collections, each keyed by an opaque identity: employees, store
//! locations, shifts, schedule entries, and attendance records. The
//! contract offers point lookup, collection scan, and exact-match filtered
//! queries; single-document writes are atomic, and multi-document cascades
//! (employee deletion, shift deletion) are issued as explicit batches by
//! the admin operations, never inferred by the store.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{AttendanceRecord, Employee, ScheduleEntry, Shift, StoreLocation};

/// CRUD and filtered-query access to the five attendance collections.
///
/// Reads return owned snapshots; report aggregation relies on reading a
/// consistent snapshot and performs no writes. Schedule entries are keyed
/// by `(employee_id, date)`, so `put_schedule_entry` is an upsert by
/// construction: at most one entry per employee per calendar date can
/// exist.
pub trait AttendanceStore {
    /// Point lookup of an employee.
    fn employee(&self, id: &str) -> Option<Employee>;
    /// All employees.
    fn employees(&self) -> Vec<Employee>;
    /// Inserts or replaces an employee by id.
    fn put_employee(&mut self, employee: Employee);
    /// Removes an employee document. Returns false if absent.
    fn remove_employee(&mut self, id: &str) -> bool;

    /// Point lookup of a store location.
    fn store_location(&self, id: &str) -> Option<StoreLocation>;
    /// All store locations.
    fn store_locations(&self) -> Vec<StoreLocation>;
    /// Inserts or replaces a store location by id.
    fn put_store_location(&mut self, store: StoreLocation);

    /// Point lookup of a shift.
    fn shift(&self, id: &str) -> Option<Shift>;
    /// All shifts.
    fn shifts(&self) -> Vec<Shift>;
    /// Inserts or replaces a shift by id.
    fn put_shift(&mut self, shift: Shift);
    /// Removes a shift document. Returns false if absent.
    fn remove_shift(&mut self, id: &str) -> bool;

    /// The schedule entry for an employee on a date, if any.
    fn schedule_entry(&self, employee_id: &str, date: NaiveDate) -> Option<ScheduleEntry>;
    /// All schedule entries.
    fn schedule_entries(&self) -> Vec<ScheduleEntry>;
    /// Entries filtered by employee.
    fn schedule_for_employee(&self, employee_id: &str) -> Vec<ScheduleEntry>;
    /// Entries filtered by shift.
    fn schedule_for_shift(&self, shift_id: &str) -> Vec<ScheduleEntry>;
    /// Inserts or replaces the entry keyed by `(employee_id, date)`.
    fn put_schedule_entry(&mut self, entry: ScheduleEntry);
    /// Removes the entry for an employee on a date. Returns false if absent.
    fn remove_schedule_entry(&mut self, employee_id: &str, date: NaiveDate) -> bool;

    /// Point lookup of an attendance record.
    fn attendance_record(&self, id: Uuid) -> Option<AttendanceRecord>;
    /// All attendance records.
    fn attendance_records(&self) -> Vec<AttendanceRecord>;
    /// Records filtered by employee.
    fn records_for_employee(&self, employee_id: &str) -> Vec<AttendanceRecord>;
    /// The employee's record with no clock-out, if one exists.
    ///
    /// This is the uniqueness check run immediately before a clock
    /// mutation: at most one open record per employee exists at any time.
    fn open_record_for_employee(&self, employee_id: &str) -> Option<AttendanceRecord>;
    /// Inserts or replaces an attendance record by id.
    fn put_attendance_record(&mut self, record: AttendanceRecord);
    /// Removes an attendance record. Returns false if absent.
    fn remove_attendance_record(&mut self, id: Uuid) -> bool;
}
