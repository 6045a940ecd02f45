//! Report aggregation.
//!
//! This module derives the two payroll-facing report shapes from raw
//! attendance records, schedule entries, and shifts: the per-employee
//! monthly summary and the per-day detail sheet. Aggregation is purely
//! derived: it reads a snapshot of the collections, mutates nothing, and
//! yields bit-identical results for identical input.

mod detail;
mod summary;

pub use detail::daily_details;
pub use summary::{monthly_summaries, monthly_summary};
