use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const EARTH_RADIUS_MILES: f64 = 3958.8;
const EARTH_RADIUS_KILOMETERS: f64 = 6371.0;
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
const EARTH_RADIUS_NAUTICAL_MILES: f64 = 3440.065;

/// Unit a distance or radius is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
    Meters,
    NauticalMiles,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 4] = [
        DistanceUnit::Miles,
        DistanceUnit::Kilometers,
        DistanceUnit::Meters,
        DistanceUnit::NauticalMiles,
    ];

    /// Mean Earth radius in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => EARTH_RADIUS_KILOMETERS,
            DistanceUnit::Meters => EARTH_RADIUS_METERS,
            DistanceUnit::NauticalMiles => EARTH_RADIUS_NAUTICAL_MILES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "MILES",
            DistanceUnit::Kilometers => "KILOMETERS",
            DistanceUnit::Meters => "METERS",
            DistanceUnit::NauticalMiles => "NAUTICAL_MILES",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distance unit: {0:?}")]
pub struct ParseUnitError(pub String);

impl FromStr for DistanceUnit {
    type Err = ParseUnitError;

    /// Accepts singular, plural and abbreviated forms, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mile" | "miles" | "mi" => Ok(DistanceUnit::Miles),
            "kilometer" | "kilometers" | "kilometre" | "kilometres" | "km" => {
                Ok(DistanceUnit::Kilometers)
            }
            "meter" | "meters" | "metre" | "metres" | "m" => Ok(DistanceUnit::Meters),
            "nautical_mile" | "nautical_miles" | "nmi" | "nm" => Ok(DistanceUnit::NauticalMiles),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}
