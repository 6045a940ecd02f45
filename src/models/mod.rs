//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod report;
mod schedule;
mod shift;
mod store_location;

pub use attendance::AttendanceRecord;
pub use employee::{Employee, Pin};
pub use report::{
    ActivityEvent, ActivityKind, DayDetail, DayStatus, EmployeeStatus, MonthlySummary, WeekDay,
};
pub use schedule::ScheduleEntry;
pub use shift::{Shift, wall_clock};
pub use store_location::StoreLocation;
