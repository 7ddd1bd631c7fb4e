//! Vehicle store - the catalog of vehicles with a secondary status index.
//!
//! The store keeps two structures in lock-step: a primary map from object id
//! to vehicle, and a status index listing which ids currently hold each
//! status. Every stored vehicle is filed under exactly one status, the one it
//! carries, and callers never observe the two structures out of step.
//!
//! ## Example
//!
//! ```
//! use food_trucks::{
//!     Coordinates, DistanceUnit, InMemoryVehicleStore, RadiusFilter, StatusSelector, Vehicle,
//!     VehicleQuery, VehicleStatus, VehicleStore,
//! };
//!
//! let store = InMemoryVehicleStore::new();
//! store.add(Vehicle::new(1, VehicleStatus::Approved, 37.7749, -122.4194))?;
//! store.add(Vehicle::new(2, VehicleStatus::Requested, 37.7750, -122.4184))?;
//!
//! let approved = store.get_by_status(StatusSelector::Only(VehicleStatus::Approved))?;
//! assert_eq!(approved.len(), 1);
//!
//! let nearby = store.query(
//!     &VehicleQuery::new(StatusSelector::All).within(RadiusFilter::new(
//!         Coordinates::new(37.7749, -122.4194),
//!         1.0,
//!         DistanceUnit::Kilometers,
//!     )),
//! )?;
//! assert_eq!(nearby.len(), 2);
//! # Ok::<(), food_trucks::StoreError>(())
//! ```

mod catalog;
mod in_memory;
mod query;

use crate::error::StoreError;
use crate::geo::{Coordinates, DistanceUnit};
use crate::vehicle::{StatusSelector, Vehicle};

pub use catalog::Catalog;
#[cfg(any(test, feature = "test-support"))]
pub use catalog::IndexInconsistency;
pub use in_memory::InMemoryVehicleStore;
pub use query::{filter_by_radius, RadiusFilter, VehicleQuery};

/// Thread-safe vehicle catalog.
///
/// Every method is atomic with respect to the store's state. Absent records
/// are reported through `Option`/`bool`; the only error is a poisoned lock.
pub trait VehicleStore: Send + Sync {
    /// Snapshot of every stored vehicle. Order is unspecified.
    fn get_all(&self) -> Result<Vec<Vehicle>, StoreError>;

    /// Vehicles matching `selector`. An empty status bucket is not an error.
    fn get_by_status(&self, selector: StatusSelector) -> Result<Vec<Vehicle>, StoreError>;

    /// Narrow `candidates` to those strictly closer than `radius` to `center`,
    /// keeping their order. Only reads the candidates, never the store.
    fn get_by_radius(
        &self,
        candidates: Vec<Vehicle>,
        center: Coordinates,
        radius: f64,
        unit: DistanceUnit,
    ) -> Vec<Vehicle> {
        filter_by_radius(candidates, &RadiusFilter::new(center, radius, unit))
    }

    /// Status selection and radius filter evaluated under one lock acquisition.
    fn query(&self, query: &VehicleQuery) -> Result<Vec<Vehicle>, StoreError>;

    fn exists(&self, id: u64) -> Result<bool, StoreError>;

    fn get(&self, id: u64) -> Result<Option<Vehicle>, StoreError>;

    /// Insert or overwrite by object id. Returns the replaced vehicle, if any.
    fn add(&self, vehicle: Vehicle) -> Result<Option<Vehicle>, StoreError>;

    /// Replace an existing vehicle, re-filing it if its status changed.
    /// Unknown ids are left alone and reported as `false`.
    fn update(&self, vehicle: Vehicle) -> Result<bool, StoreError>;

    fn remove(&self, id: u64) -> Result<Option<Vehicle>, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
