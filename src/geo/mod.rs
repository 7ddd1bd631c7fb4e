//! Great-circle distance on a spherical Earth.
//!
//! Distances are computed with the haversine formula against the mean Earth
//! radius expressed in the caller's [`DistanceUnit`]. Everything here is pure
//! and stateless, so it is safe to call from any thread without coordination.
//!
//! ## Example
//!
//! ```
//! use food_trucks::geo::{distance, DistanceUnit};
//!
//! let km = distance(37.7749, -122.4194, 37.8044, -122.2712, DistanceUnit::Kilometers);
//! assert!(km > 13.0 && km < 14.0);
//! ```

mod distance;
mod unit;

use serde::{Deserialize, Serialize};

pub use distance::{distance, distance_between};
pub use unit::{DistanceUnit, ParseUnitError};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
