use serde::{Deserialize, Serialize};

use crate::geo::{distance_between, Coordinates, DistanceUnit};
use crate::vehicle::{StatusSelector, Vehicle};

/// A circle on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusFilter {
    pub center: Coordinates,
    pub radius: f64,
    pub unit: DistanceUnit,
}

impl RadiusFilter {
    pub fn new(center: Coordinates, radius: f64, unit: DistanceUnit) -> Self {
        Self {
            center,
            radius,
            unit,
        }
    }

    /// Strictly inside the circle. A point exactly on the boundary is
    /// outside, and a negative or NaN radius contains nothing.
    pub fn contains(&self, point: Coordinates) -> bool {
        distance_between(point, self.center, self.unit) < self.radius
    }
}

/// Keep the candidates that fall strictly inside `area`, preserving order.
pub fn filter_by_radius(candidates: Vec<Vehicle>, area: &RadiusFilter) -> Vec<Vehicle> {
    candidates
        .into_iter()
        .filter(|vehicle| area.contains(vehicle.coordinates()))
        .collect()
}

/// Status selection, optionally narrowed to a circle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleQuery {
    pub status: StatusSelector,
    pub area: Option<RadiusFilter>,
}

impl VehicleQuery {
    pub fn new(status: StatusSelector) -> Self {
        Self { status, area: None }
    }

    pub fn within(mut self, area: RadiusFilter) -> Self {
        self.area = Some(area);
        self
    }
}
