//! Shared fixtures for store tests.

use food_trucks::{InMemoryVehicleStore, StatusSelector, Vehicle, VehicleStatus, VehicleStore};

pub fn truck(id: u64, status: VehicleStatus, latitude: f64, longitude: f64) -> Vehicle {
    Vehicle::new(id, status, latitude, longitude).with_applicant(format!("Truck #{id}"))
}

pub fn ids(vehicles: &[Vehicle]) -> Vec<u64> {
    let mut ids: Vec<u64> = vehicles.iter().map(|v| v.object_id).collect();
    ids.sort_unstable();
    ids
}

/// Assert that the status buckets partition the primary map exactly.
pub fn assert_index_consistent(store: &InMemoryVehicleStore) {
    store
        .inspect(|catalog| catalog.check_consistency())
        .unwrap()
        .unwrap();

    let all = store.get_all().unwrap();
    let mut bucketed = Vec::new();
    for status in VehicleStatus::ALL {
        let bucket = store.get_by_status(StatusSelector::Only(status)).unwrap();
        assert!(bucket.iter().all(|v| v.status == status));
        bucketed.extend(bucket);
    }
    assert_eq!(ids(&bucketed), ids(&all));
    assert_eq!(all.len(), store.len().unwrap());
}

/// Small deterministic generator so property-style tests are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    pub fn status(&mut self) -> VehicleStatus {
        VehicleStatus::ALL[self.below(VehicleStatus::ALL.len() as u64) as usize]
    }

    pub fn coordinate(&mut self, span: f64) -> f64 {
        (self.below(10_000) as f64 / 10_000.0 - 0.5) * span
    }
}
