//! Clock validation logic.
//!
//! This module decides whether a clock-in or clock-out attempt is permitted
//! for a shift at a given instant, and computes the punctuality deviation
//! recorded alongside a successful action. The permission window and the
//! deviation are independent: grace periods widen permission, never the
//! zero-point of lateness.

mod deviation;
mod window;

pub use deviation::{early_leave_hours, late_hours};
pub use window::{ClockAction, ClockWindow, check_window, permitted_window};
