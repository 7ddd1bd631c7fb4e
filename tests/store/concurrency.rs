//! Concurrent readers and writers sharing one store.

use std::thread;

use food_trucks::{InMemoryVehicleStore, StatusSelector, VehicleStatus, VehicleStore};

use crate::support::{assert_index_consistent, truck, Lcg};

#[test]
fn parallel_writers_keep_index_consistent() {
    let store = InMemoryVehicleStore::new();

    thread::scope(|scope| {
        for worker in 0..8u64 {
            let store = store.clone();
            scope.spawn(move || {
                let mut rng = Lcg::new(worker + 1);
                for _ in 0..500 {
                    let id = rng.below(64);
                    let status = rng.status();
                    match rng.below(3) {
                        0 => {
                            store.add(truck(id, status, 37.7, -122.4)).unwrap();
                        }
                        1 => {
                            store.update(truck(id, status, 37.8, -122.5)).unwrap();
                        }
                        _ => {
                            store.remove(id).unwrap();
                        }
                    }
                }
            });
        }

        for _ in 0..4 {
            let store = store.clone();
            scope.spawn(move || {
                for _ in 0..200 {
                    store
                        .inspect(|catalog| catalog.check_consistency())
                        .unwrap()
                        .unwrap();
                }
            });
        }
    });

    assert_index_consistent(&store);
}

#[test]
fn readers_never_see_a_half_applied_update() {
    let store = InMemoryVehicleStore::new();
    store
        .add(truck(1, VehicleStatus::Approved, 1.0, 1.0))
        .unwrap();

    thread::scope(|scope| {
        let writer = store.clone();
        scope.spawn(move || {
            for round in 0..2_000 {
                let next = if round % 2 == 0 {
                    truck(1, VehicleStatus::Expired, 2.0, 2.0)
                } else {
                    truck(1, VehicleStatus::Approved, 1.0, 1.0)
                };
                assert!(writer.update(next).unwrap());
            }
        });

        for _ in 0..4 {
            let reader = store.clone();
            scope.spawn(move || {
                for _ in 0..2_000 {
                    let snapshot = reader.get_all().unwrap();
                    assert_eq!(snapshot.len(), 1);
                    let vehicle = &snapshot[0];
                    let expected_lat = match vehicle.status {
                        VehicleStatus::Approved => 1.0,
                        VehicleStatus::Expired => 2.0,
                        other => panic!("unexpected status {other}"),
                    };
                    assert_eq!(vehicle.latitude, expected_lat);

                    let approved = reader
                        .get_by_status(StatusSelector::Only(VehicleStatus::Approved))
                        .unwrap();
                    assert!(approved.iter().all(|v| v.latitude == 1.0));

                    let (in_approved, in_expired) = reader
                        .inspect(|c| {
                            (
                                c.bucket_ids(VehicleStatus::Approved).len(),
                                c.bucket_ids(VehicleStatus::Expired).len(),
                            )
                        })
                        .unwrap();
                    assert_eq!(in_approved + in_expired, 1);
                }
            });
        }
    });

    assert_index_consistent(&store);
}
