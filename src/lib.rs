mod config;
mod error;
pub mod geo;
pub mod ingest;
mod store;
mod vehicle;

#[cfg(feature = "http")]
pub mod http;

pub use config::ServiceConfig;
pub use error::StoreError;
pub use geo::{distance, distance_between, Coordinates, DistanceUnit, ParseUnitError};
pub use ingest::{IngestError, IngestReport};
pub use store::{
    filter_by_radius, Catalog, InMemoryVehicleStore, RadiusFilter, VehicleQuery, VehicleStore,
};
#[cfg(any(test, feature = "test-support"))]
pub use store::IndexInconsistency;
pub use vehicle::{ParseStatusError, StatusSelector, Vehicle, VehicleStatus};
