//! Clock engine orchestration.
//!
//! [`ClockEngine`] ties the store, the injected clock, the position
//! provider, and the configuration together behind the single
//! `record_action` entry point. The engine decides clock-in versus
//! clock-out from the authoritative open-record state in the store, so the
//! kiosk's last-seen state can never race the persisted one.

mod admin;
mod status;

pub use admin::{
    add_employee, add_shift, assign_shift, clear_assignment, correct_attendance_record,
    delete_employee, delete_shift, update_employee, update_shift, update_store_location,
};
pub use status::{employee_status, recent_activity, week_schedule};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::geofence::{Coordinates, distance_meters};
use crate::models::{
    AttendanceRecord, DayDetail, Employee, MonthlySummary, ScheduleEntry, Shift,
};
use crate::providers::{ClockProvider, PositionProvider};
use crate::report;
use crate::store::AttendanceStore;
use crate::validation::{ClockAction, check_window, early_leave_hours, late_hours};

/// The result of a successful clock action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockOutcome {
    /// Which action the engine performed.
    pub action: ClockAction,
    /// The attendance record that was opened or closed.
    pub record: AttendanceRecord,
}

/// The attendance engine over injected collaborators.
///
/// Callers must serialize clock actions per employee; the engine performs
/// the open-record uniqueness check immediately before mutating, but does
/// not arbitrate concurrent calls for the same employee.
#[derive(Debug, Clone)]
pub struct ClockEngine<S, C, P> {
    store: S,
    clock: C,
    position: P,
    config: EngineConfig,
}

impl<S, C, P> ClockEngine<S, C, P>
where
    S: AttendanceStore,
    C: ClockProvider,
    P: PositionProvider,
{
    /// Creates an engine over the given collaborators.
    pub fn new(store: S, clock: C, position: P, config: EngineConfig) -> Self {
        Self {
            store,
            clock,
            position,
            config,
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write access to the underlying store, for admin operations.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Records a clock action for an employee at the injected clock's
    /// current instant.
    ///
    /// See [`ClockEngine::record_action_at`].
    pub async fn record_action(&mut self, employee_id: &str) -> EngineResult<ClockOutcome> {
        let now = self.clock.now();
        self.record_action_at(employee_id, now).await
    }

    /// Records a clock action for an employee at an explicit instant.
    ///
    /// The engine determines the action from the authoritative open-record
    /// state: no open record means clock-in, an open record means
    /// clock-out. A redundant clock-in is therefore not expressible: a
    /// second attempt while a record is open becomes the closing
    /// clock-out and is validated as one.
    ///
    /// The decision sequence, first failure wins:
    ///
    /// 1. today's schedule entry ([`EngineError::NoScheduleToday`])
    /// 2. the entry's shift ([`EngineError::ShiftNotFound`])
    /// 3. the permitted time window ([`EngineError::OutsideTimeWindow`])
    /// 4. the entry's store and its coordinates
    ///    ([`EngineError::StoreLocationMissing`])
    /// 5. the device position, under the configured timeout
    ///    ([`EngineError::LocationUnavailable`])
    /// 6. the geofence ([`EngineError::OutsideGeofence`])
    /// 7. open or close the attendance record
    pub async fn record_action_at(
        &mut self,
        employee_id: &str,
        observed_now: NaiveDateTime,
    ) -> EngineResult<ClockOutcome> {
        let employee =
            self.store
                .employee(employee_id)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    employee_id: employee_id.to_string(),
                })?;

        let open_record = self.store.open_record_for_employee(employee_id);
        let action = match open_record {
            Some(_) => ClockAction::ClockOut,
            None => ClockAction::ClockIn,
        };

        let today = observed_now.date();
        let entry = self
            .store
            .schedule_entry(employee_id, today)
            .ok_or_else(|| EngineError::NoScheduleToday {
                employee_id: employee_id.to_string(),
                date: today,
            })?;

        let shift =
            self.store
                .shift(&entry.shift_id)
                .ok_or_else(|| EngineError::ShiftNotFound {
                    shift_id: entry.shift_id.clone(),
                })?;

        check_window(&shift, action, observed_now)?;

        let store_location = self
            .store
            .store_location(&entry.store_id)
            .filter(|s| s.has_location())
            .ok_or_else(|| EngineError::StoreLocationMissing {
                store_id: entry.store_id.clone(),
            })?;

        let position = match tokio::time::timeout(
            self.config.position_timeout(),
            self.position.current_position(),
        )
        .await
        {
            Ok(Ok(position)) => position,
            Ok(Err(e)) => {
                return Err(EngineError::LocationUnavailable {
                    message: e.to_string(),
                });
            }
            Err(_) => {
                return Err(EngineError::LocationUnavailable {
                    message: "position request timed out".to_string(),
                });
            }
        };

        let distance = distance_meters(position, Coordinates::from(&store_location));
        if distance > self.config.geofence_radius_meters {
            let distance_meters = distance.round() as i64;
            warn!(
                employee_id = %employee.id,
                store_id = %store_location.id,
                distance_meters,
                "Clock action rejected outside geofence"
            );
            return Err(EngineError::OutsideGeofence { distance_meters });
        }

        let record = match open_record {
            None => {
                let record = AttendanceRecord::open(
                    employee_id,
                    observed_now,
                    late_hours(&shift, observed_now),
                );
                self.store.put_attendance_record(record.clone());
                record
            }
            Some(mut record) => {
                record.close(observed_now, early_leave_hours(&shift, observed_now));
                self.store.put_attendance_record(record.clone());
                record
            }
        };

        info!(
            employee_id = %employee.id,
            record_id = %record.id,
            action = ?action,
            "Recorded clock action"
        );

        Ok(ClockOutcome { action, record })
    }

    /// The monthly summary report over the store's current snapshot.
    pub fn summary_report(&self, year: i32, month: u32) -> Vec<MonthlySummary> {
        let snapshot = self.snapshot();
        report::monthly_summaries(
            &self.store.employees(),
            &snapshot.0,
            &snapshot.1,
            &snapshot.2,
            year,
            month,
        )
    }

    /// The per-day detail report for one employee over the store's current
    /// snapshot.
    pub fn detail_report(&self, employee_id: &str, year: i32, month: u32) -> Vec<DayDetail> {
        let snapshot = self.snapshot();
        report::daily_details(employee_id, &snapshot.0, &snapshot.1, &snapshot.2, year, month)
    }

    fn snapshot(&self) -> (Vec<AttendanceRecord>, Vec<ScheduleEntry>, Vec<Shift>) {
        (
            self.store.attendance_records(),
            self.store.schedule_entries(),
            self.store.shifts(),
        )
    }
}

/// Checks a PIN candidate entered at the kiosk against an employee.
///
/// A trivial equality test over the stored 4-digit PIN.
pub fn verify_pin(employee: &Employee, candidate: &str) -> bool {
    employee.pin.verify(candidate)
}
