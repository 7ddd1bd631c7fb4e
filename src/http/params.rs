use serde::Deserialize;
use thiserror::Error;

use crate::geo::{Coordinates, DistanceUnit, ParseUnitError};
use crate::store::{RadiusFilter, VehicleQuery};
use crate::vehicle::StatusSelector;

/// Query string of `GET /foodtrucks/query`. Every field is raw text so a bad
/// number degrades the query instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub status: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    pub radius_unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Unit(#[from] ParseUnitError),
}

fn number(field: &'static str, value: &str) -> Result<f64, GeometryError> {
    value
        .trim()
        .parse()
        .map_err(|_| GeometryError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl QueryParams {
    pub fn status(&self) -> StatusSelector {
        StatusSelector::parse(self.status.as_deref())
    }

    /// The circle described by the geometry parameters. `None` unless all
    /// four are present.
    pub fn radius_filter(&self) -> Option<Result<RadiusFilter, GeometryError>> {
        let (Some(lat), Some(lon), Some(radius), Some(unit)) = (
            self.latitude.as_deref(),
            self.longitude.as_deref(),
            self.radius.as_deref(),
            self.radius_unit.as_deref(),
        ) else {
            return None;
        };

        let parsed = || -> Result<RadiusFilter, GeometryError> {
            let center = Coordinates::new(number("latitude", lat)?, number("longitude", lon)?);
            let radius = number("radius", radius)?;
            let unit: DistanceUnit = unit.parse()?;
            Ok(RadiusFilter::new(center, radius, unit))
        };
        Some(parsed())
    }

    /// Build the store query. Unusable geometry drops the spatial filter.
    pub fn to_query(&self) -> VehicleQuery {
        let query = VehicleQuery::new(self.status());
        match self.radius_filter() {
            Some(Ok(area)) => query.within(area),
            Some(Err(err)) => {
                tracing::debug!(error = %err, "ignoring spatial filter");
                query
            }
            None => query,
        }
    }
}
