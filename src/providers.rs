//! Boundary provider contracts.
//!
//! The engine never reads the system clock or the device position
//! ambiently. Both are injected through the traits in this module so that
//! every time-sensitive and location-sensitive decision is deterministic
//! under test.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::geofence::Coordinates;

/// A failure reported by a [`PositionProvider`].
///
/// Timeouts are not represented here; the engine applies its own timeout
/// around the single-shot position request and reports both cases as
/// `LocationUnavailable`.
#[derive(Debug, Clone, Error)]
pub enum PositionError {
    /// The user or platform denied access to the device position.
    #[error("permission to access the device position was denied")]
    PermissionDenied,
    /// Any other provider failure.
    #[error("{0}")]
    Unavailable(String),
}

/// Source of the current wall-clock instant.
///
/// Injectable so tests can pin "now" to fixed instants; production shells
/// use [`SystemClock`].
pub trait ClockProvider {
    /// Returns the current local wall-clock instant.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for tests.
///
/// # Example
///
/// ```
/// use attendance_engine::providers::{ClockProvider, FixedClock};
/// use chrono::NaiveDate;
///
/// let instant = NaiveDate::from_ymd_opt(2026, 3, 9)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl ClockProvider for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Source of the current device coordinates.
///
/// A single-shot request: the engine calls it once per clock action, under
/// its own timeout, and never retries. Retrying is the caller's decision.
#[async_trait]
pub trait PositionProvider {
    /// Returns the device's current coordinates, or a failure.
    async fn current_position(&self) -> Result<Coordinates, PositionError>;
}

/// A provider that always reports the same coordinates, for tests and
/// fixed-terminal kiosks.
#[derive(Debug, Clone, Copy)]
pub struct StaticPosition(Coordinates);

impl StaticPosition {
    /// Creates a provider pinned to `position`.
    pub fn new(position: Coordinates) -> Self {
        Self(position)
    }
}

#[async_trait]
impl PositionProvider for StaticPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Ok(self.0)
    }
}

/// A provider that always fails, for exercising the rejection path.
#[derive(Debug, Clone)]
pub struct UnavailablePosition(pub PositionError);

#[async_trait]
impl PositionProvider for UnavailablePosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Err(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_reports_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(FixedClock::new(instant).now(), instant);
    }

    #[tokio::test]
    async fn test_static_position_reports_its_coordinates() {
        let provider = StaticPosition::new(Coordinates::new(21.03, 105.8));
        let position = provider.current_position().await.unwrap();
        assert_eq!(position, Coordinates::new(21.03, 105.8));
    }

    #[tokio::test]
    async fn test_unavailable_position_fails() {
        let provider = UnavailablePosition(PositionError::PermissionDenied);
        let err = provider.current_position().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "permission to access the device position was denied"
        );
    }
}
