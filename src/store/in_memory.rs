//! InMemoryVehicleStore - RwLock-guarded catalog shared by cloning.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::{Catalog, VehicleQuery, VehicleStore};
use crate::error::StoreError;
use crate::vehicle::{StatusSelector, Vehicle};

/// In-memory vehicle store.
///
/// The primary map and the status index live behind a single `RwLock`, so
/// reads run in parallel and each mutation touches both structures while
/// holding the write guard. Clones share the same catalog.
#[derive(Clone, Default)]
pub struct InMemoryVehicleStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryVehicleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Catalog>, StoreError> {
        self.catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Catalog>, StoreError> {
        self.catalog
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Run `f` against the catalog under the read lock.
    ///
    /// Useful for compound reads that must see one consistent state.
    #[cfg(any(test, feature = "test-support"))]
    pub fn inspect<T>(&self, f: impl FnOnce(&Catalog) -> T) -> Result<T, StoreError> {
        let catalog = self.read("inspect")?;
        Ok(f(&catalog))
    }
}

impl VehicleStore for InMemoryVehicleStore {
    fn get_all(&self) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self.read("get_all")?.all())
    }

    fn get_by_status(&self, selector: StatusSelector) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self.read("get_by_status")?.select(selector))
    }

    fn query(&self, query: &VehicleQuery) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self.read("query")?.matching(query))
    }

    fn exists(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.read("exists")?.contains(id))
    }

    fn get(&self, id: u64) -> Result<Option<Vehicle>, StoreError> {
        Ok(self.read("get")?.get(id).cloned())
    }

    fn add(&self, vehicle: Vehicle) -> Result<Option<Vehicle>, StoreError> {
        let id = vehicle.object_id;
        let status = vehicle.status;
        let previous = self.write("add")?.insert(vehicle);
        debug!(id, %status, replaced = previous.is_some(), "added vehicle");
        Ok(previous)
    }

    fn update(&self, vehicle: Vehicle) -> Result<bool, StoreError> {
        let id = vehicle.object_id;
        let status = vehicle.status;
        let updated = self.write("update")?.replace(vehicle);
        if updated {
            debug!(id, %status, "updated vehicle");
        } else {
            debug!(id, "update ignored for unknown vehicle");
        }
        Ok(updated)
    }

    fn remove(&self, id: u64) -> Result<Option<Vehicle>, StoreError> {
        let removed = self.write("remove")?.remove(id);
        debug!(id, removed = removed.is_some(), "removed vehicle");
        Ok(removed)
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read("len")?.len())
    }
}
