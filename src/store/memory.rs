//! In-memory reference implementation of the store contract.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use super::AttendanceStore;
use crate::models::{AttendanceRecord, Employee, ScheduleEntry, Shift, StoreLocation};

/// An in-memory [`AttendanceStore`].
///
/// Backs the integration tests and serves as the reference for the
/// contract's query semantics. Scans return documents in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    stores: Vec<StoreLocation>,
    shifts: Vec<Shift>,
    schedule: HashMap<(String, NaiveDate), ScheduleEntry>,
    records: Vec<AttendanceRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceStore for MemoryStore {
    fn employee(&self, id: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    fn employees(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    fn put_employee(&mut self, employee: Employee) {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee,
            None => self.employees.push(employee),
        }
    }

    fn remove_employee(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        self.employees.len() != before
    }

    fn store_location(&self, id: &str) -> Option<StoreLocation> {
        self.stores.iter().find(|s| s.id == id).cloned()
    }

    fn store_locations(&self) -> Vec<StoreLocation> {
        self.stores.clone()
    }

    fn put_store_location(&mut self, store: StoreLocation) {
        match self.stores.iter_mut().find(|s| s.id == store.id) {
            Some(existing) => *existing = store,
            None => self.stores.push(store),
        }
    }

    fn shift(&self, id: &str) -> Option<Shift> {
        self.shifts.iter().find(|s| s.id == id).cloned()
    }

    fn shifts(&self) -> Vec<Shift> {
        self.shifts.clone()
    }

    fn put_shift(&mut self, shift: Shift) {
        match self.shifts.iter_mut().find(|s| s.id == shift.id) {
            Some(existing) => *existing = shift,
            None => self.shifts.push(shift),
        }
    }

    fn remove_shift(&mut self, id: &str) -> bool {
        let before = self.shifts.len();
        self.shifts.retain(|s| s.id != id);
        self.shifts.len() != before
    }

    fn schedule_entry(&self, employee_id: &str, date: NaiveDate) -> Option<ScheduleEntry> {
        self.schedule
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn schedule_entries(&self) -> Vec<ScheduleEntry> {
        let mut entries: Vec<_> = self.schedule.values().cloned().collect();
        entries.sort_by(|a, b| (&a.employee_id, a.date).cmp(&(&b.employee_id, b.date)));
        entries
    }

    fn schedule_for_employee(&self, employee_id: &str) -> Vec<ScheduleEntry> {
        let mut entries: Vec<_> = self
            .schedule
            .values()
            .filter(|e| e.employee_id == employee_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.date);
        entries
    }

    fn schedule_for_shift(&self, shift_id: &str) -> Vec<ScheduleEntry> {
        let mut entries: Vec<_> = self
            .schedule
            .values()
            .filter(|e| e.shift_id == shift_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| (&a.employee_id, a.date).cmp(&(&b.employee_id, b.date)));
        entries
    }

    fn put_schedule_entry(&mut self, entry: ScheduleEntry) {
        self.schedule
            .insert((entry.employee_id.clone(), entry.date), entry);
    }

    fn remove_schedule_entry(&mut self, employee_id: &str, date: NaiveDate) -> bool {
        self.schedule
            .remove(&(employee_id.to_string(), date))
            .is_some()
    }

    fn attendance_record(&self, id: Uuid) -> Option<AttendanceRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.records.clone()
    }

    fn records_for_employee(&self, employee_id: &str) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect()
    }

    fn open_record_for_employee(&self, employee_id: &str) -> Option<AttendanceRecord> {
        self.records
            .iter()
            .find(|r| r.employee_id == employee_id && r.is_open())
            .cloned()
    }

    fn put_attendance_record(&mut self, record: AttendanceRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    fn remove_attendance_record(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}
