//! Vehicle records and their status types.

pub(crate) mod number;
mod status;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

pub use status::{ParseStatusError, StatusSelector, VehicleStatus};

/// A mobile food facility permit, keyed by the upstream `objectid`.
///
/// Only the identifier, status and coordinates take part in queries; the rest
/// is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "objectid", deserialize_with = "number::deserialize")]
    pub object_id: u64,
    pub status: VehicleStatus,
    #[serde(deserialize_with = "number::deserialize")]
    pub latitude: f64,
    #[serde(deserialize_with = "number::deserialize")]
    pub longitude: f64,
    #[serde(default)]
    pub applicant: String,
    #[serde(
        rename = "facilitytype",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub facility_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        rename = "locationdescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_description: Option<String>,
    #[serde(rename = "fooditems", default, skip_serializing_if = "Option::is_none")]
    pub food_items: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit: Option<String>,
}

impl Vehicle {
    pub fn new(object_id: u64, status: VehicleStatus, latitude: f64, longitude: f64) -> Self {
        Self {
            object_id,
            status,
            latitude,
            longitude,
            applicant: String::new(),
            facility_type: None,
            address: None,
            location_description: None,
            food_items: None,
            permit: None,
        }
    }

    pub fn with_applicant(mut self, applicant: impl Into<String>) -> Self {
        self.applicant = applicant.into();
        self
    }

    pub fn with_facility_type(mut self, facility_type: impl Into<String>) -> Self {
        self.facility_type = Some(facility_type.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}
