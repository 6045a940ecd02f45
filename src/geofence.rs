//! Geofence evaluation.
//!
//! This module computes great-circle distances between device and store
//! coordinates and decides whether a clock action happens inside the
//! permitted radius around the scheduled store.

use serde::{Deserialize, Serialize};

use crate::models::StoreLocation;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&StoreLocation> for Coordinates {
    fn from(store: &StoreLocation) -> Self {
        Self {
            latitude: store.latitude,
            longitude: store.longitude,
        }
    }
}

/// Great-circle distance between two coordinates, in meters.
///
/// Uses the haversine formula with a mean Earth radius of 6,371,000 m.
/// The result is symmetric in its arguments and zero for identical
/// coordinates.
///
/// # Examples
///
/// ```
/// use attendance_engine::geofence::{Coordinates, distance_meters};
///
/// let store = Coordinates::new(21.030, 105.800);
/// assert_eq!(distance_meters(store, store), 0.0);
///
/// let nearby = Coordinates::new(21.0345, 105.800);
/// let d = distance_meters(store, nearby);
/// assert!((d - 500.0).abs() < 5.0); // 0.0045 deg latitude ~ 500 m
/// ```
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Decides whether a position is inside the radius around a store.
///
/// Fails closed: a store whose coordinates are the `(0, 0)` "no location"
/// sentinel never matches, regardless of the position or radius.
///
/// # Examples
///
/// ```
/// use attendance_engine::geofence::{Coordinates, is_within_radius};
/// use attendance_engine::models::StoreLocation;
///
/// let store = StoreLocation {
///     id: "store_1".to_string(),
///     name: "Warehouse".to_string(),
///     latitude: 21.030,
///     longitude: 105.800,
/// };
/// let at_the_door = Coordinates::new(21.0301, 105.8001);
/// assert!(is_within_radius(at_the_door, &store, 500.0));
///
/// let unassigned = StoreLocation { latitude: 0.0, longitude: 0.0, ..store };
/// assert!(!is_within_radius(at_the_door, &unassigned, 500.0));
/// ```
pub fn is_within_radius(position: Coordinates, store: &StoreLocation, radius_meters: f64) -> bool {
    if !store.has_location() {
        return false;
    }
    distance_meters(position, Coordinates::from(store)) <= radius_meters
}
