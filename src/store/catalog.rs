use std::collections::HashMap;

use crate::vehicle::{StatusSelector, Vehicle, VehicleStatus};

use super::VehicleQuery;

/// Primary map plus the status index, without any locking.
///
/// Each status bucket lists object ids in the order they entered the bucket;
/// bucket reads resolve ids through the primary map, so a bucket never holds
/// its own copy of a record.
#[derive(Debug, Default)]
pub struct Catalog {
    vehicles: HashMap<u64, Vehicle>,
    by_status: HashMap<VehicleStatus, Vec<u64>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.vehicles.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn all(&self) -> Vec<Vehicle> {
        self.vehicles.values().cloned().collect()
    }

    pub fn select(&self, selector: StatusSelector) -> Vec<Vehicle> {
        match selector {
            StatusSelector::All => self.all(),
            StatusSelector::NoStatement => Vec::new(),
            StatusSelector::Only(status) => self.bucket(status).cloned().collect(),
        }
    }

    /// Status selection followed by the optional radius filter, cloning only
    /// the vehicles that survive both.
    pub fn matching(&self, query: &VehicleQuery) -> Vec<Vehicle> {
        let keep = |vehicle: &&Vehicle| {
            query
                .area
                .as_ref()
                .map_or(true, |area| area.contains(vehicle.coordinates()))
        };
        match query.status {
            StatusSelector::All => self.vehicles.values().filter(keep).cloned().collect(),
            StatusSelector::NoStatement => Vec::new(),
            StatusSelector::Only(status) => self.bucket(status).filter(keep).cloned().collect(),
        }
    }

    fn bucket(&self, status: VehicleStatus) -> impl Iterator<Item = &Vehicle> + '_ {
        self.by_status
            .get(&status)
            .into_iter()
            .flatten()
            .filter_map(|id| self.vehicles.get(id))
    }

    /// Insert or overwrite, returning the record that was replaced.
    pub fn insert(&mut self, vehicle: Vehicle) -> Option<Vehicle> {
        let id = vehicle.object_id;
        let status = vehicle.status;
        let previous = self.vehicles.insert(id, vehicle);

        match previous.as_ref().map(|p| p.status) {
            Some(old) if old == status => {}
            Some(old) => {
                self.unindex(old, id);
                self.index(status, id);
            }
            None => self.index(status, id),
        }
        previous
    }

    /// Replace an existing record; `false` when the id is unknown.
    pub fn replace(&mut self, vehicle: Vehicle) -> bool {
        if !self.vehicles.contains_key(&vehicle.object_id) {
            return false;
        }
        self.insert(vehicle);
        true
    }

    pub fn remove(&mut self, id: u64) -> Option<Vehicle> {
        let removed = self.vehicles.remove(&id)?;
        self.unindex(removed.status, id);
        Some(removed)
    }

    fn index(&mut self, status: VehicleStatus, id: u64) {
        self.by_status.entry(status).or_default().push(id);
    }

    fn unindex(&mut self, status: VehicleStatus, id: u64) {
        if let Some(bucket) = self.by_status.get_mut(&status) {
            if let Some(pos) = bucket.iter().position(|&entry| entry == id) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                self.by_status.remove(&status);
            }
        }
    }

    /// Ids currently filed under `status`, in bucket order.
    pub fn bucket_ids(&self, status: VehicleStatus) -> &[u64] {
        self.by_status
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check that every stored vehicle sits in exactly one bucket, the one
    /// matching its status, and that buckets reference nothing else.
    #[cfg(any(test, feature = "test-support"))]
    pub fn check_consistency(&self) -> Result<(), IndexInconsistency> {
        let mut seen = HashMap::with_capacity(self.vehicles.len());

        for (&status, ids) in &self.by_status {
            for &id in ids {
                let vehicle = self
                    .vehicles
                    .get(&id)
                    .ok_or(IndexInconsistency::DanglingEntry { status, id })?;
                if vehicle.status != status {
                    return Err(IndexInconsistency::WrongBucket {
                        id,
                        status: vehicle.status,
                        filed_under: status,
                    });
                }
                if seen.insert(id, status).is_some() {
                    return Err(IndexInconsistency::Duplicate(id));
                }
            }
        }

        match self.vehicles.keys().find(|id| !seen.contains_key(*id)) {
            Some(&id) => Err(IndexInconsistency::Unindexed(id)),
            None => Ok(()),
        }
    }
}

/// A way the status index can disagree with the primary map.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexInconsistency {
    #[error("bucket {status} references missing vehicle {id}")]
    DanglingEntry { status: VehicleStatus, id: u64 },
    #[error("vehicle {id} has status {status} but is filed under {filed_under}")]
    WrongBucket {
        id: u64,
        status: VehicleStatus,
        filed_under: VehicleStatus,
    },
    #[error("vehicle {0} is indexed more than once")]
    Duplicate(u64),
    #[error("vehicle {0} is missing from the status index")]
    Unindexed(u64),
}
