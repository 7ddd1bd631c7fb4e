use serde::Deserialize;
use thiserror::Error;

use crate::vehicle::number::NumberOrString;
use crate::vehicle::{Vehicle, VehicleStatus};

/// One dataset entry before validation.
#[derive(Deserialize)]
pub(super) struct RawRecord {
    objectid: Option<NumberOrString<u64>>,
    status: Option<String>,
    latitude: Option<NumberOrString<f64>>,
    longitude: Option<NumberOrString<f64>>,
    #[serde(default)]
    applicant: Option<String>,
    #[serde(default)]
    facilitytype: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    locationdescription: Option<String>,
    #[serde(default)]
    fooditems: Option<String>,
    #[serde(default)]
    permit: Option<String>,
}

#[derive(Debug, Error)]
pub(super) enum SkipReason {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("record has no usable objectid")]
    MissingId,
    #[error("record has no status")]
    MissingStatus,
    #[error("unknown status {0:?}")]
    UnknownStatus(String),
    #[error("vehicle {0} has unusable coordinates")]
    BadCoordinates(u64),
}

impl RawRecord {
    pub(super) fn decode(value: serde_json::Value) -> Result<Vehicle, SkipReason> {
        let raw: RawRecord =
            serde_json::from_value(value).map_err(|e| SkipReason::Malformed(e.to_string()))?;

        let object_id = raw
            .objectid
            .and_then(NumberOrString::into_number)
            .ok_or(SkipReason::MissingId)?;

        let status = raw.status.ok_or(SkipReason::MissingStatus)?;
        let status: VehicleStatus = status
            .parse()
            .map_err(|_| SkipReason::UnknownStatus(status))?;

        let latitude = raw.latitude.and_then(NumberOrString::into_number);
        let longitude = raw.longitude.and_then(NumberOrString::into_number);
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => (lat, lon),
            _ => return Err(SkipReason::BadCoordinates(object_id)),
        };

        Ok(Vehicle {
            object_id,
            status,
            latitude,
            longitude,
            applicant: raw.applicant.unwrap_or_default(),
            facility_type: raw.facilitytype,
            address: raw.address,
            location_description: raw.locationdescription,
            food_items: raw.fooditems,
            permit: raw.permit,
        })
    }
}
