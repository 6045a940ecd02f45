//! Store location model.

use serde::{Deserialize, Serialize};

/// Represents a physical store of the chain.
///
/// Latitude and longitude both `0.0` is the sentinel for "no location
/// assigned": a store in that state can never satisfy a geofence check,
/// so employees scheduled there cannot clock in until real coordinates
/// are entered.
///
/// # Example
///
/// ```
/// use attendance_engine::models::StoreLocation;
///
/// let unassigned = StoreLocation {
///     id: "store_7".to_string(),
///     name: "Unassigned".to_string(),
///     latitude: 0.0,
///     longitude: 0.0,
/// };
/// assert!(!unassigned.has_location());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    /// Unique identifier for the store.
    pub id: String,
    /// Display name of the store.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl StoreLocation {
    /// Returns true unless the coordinates are the `(0, 0)` sentinel.
    pub fn has_location(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}
