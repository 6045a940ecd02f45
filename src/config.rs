//! Engine configuration.
//!
//! The engine's two operational knobs are the geofence radius around each
//! store and the timeout applied to the single-shot device position
//! request. Both can be loaded from a YAML file or taken from defaults.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load("./config/engine.yaml").unwrap();
//! println!("Geofence radius: {}m", config.geofence_radius_meters);
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_geofence_radius() -> f64 {
    500.0
}

fn default_position_timeout() -> u64 {
    10
}

/// Operational configuration for the clock engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Radius around a store within which clock actions are accepted.
    #[serde(default = "default_geofence_radius")]
    pub geofence_radius_meters: f64,
    /// Seconds to wait for the device position before giving up.
    #[serde(default = "default_position_timeout")]
    pub position_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            geofence_radius_meters: default_geofence_radius(),
            position_timeout_secs: default_position_timeout(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Fields absent from the file take their defaults (500 m radius,
    /// 10 s position timeout).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read
    /// and [`EngineError::ConfigParseError`] if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The position timeout as a [`Duration`].
    pub fn position_timeout(&self) -> Duration {
        Duration::from_secs(self.position_timeout_secs)
    }
}
