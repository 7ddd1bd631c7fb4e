//! Dataset ingestion - decode the DataSF permit feed and load it into a store.
//!
//! The feed is a JSON array of loosely typed objects. Records that cannot
//! become a [`Vehicle`] (no id, unknown status, unusable coordinates) are
//! skipped and counted rather than failing the whole load.

mod raw;
#[cfg(feature = "http")]
mod remote;

use std::io::Read;

use thiserror::Error;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::store::VehicleStore;
use crate::vehicle::Vehicle;

use raw::RawRecord;

#[cfg(feature = "http")]
pub use remote::{fetch_dataset, Ingestor};

/// Mobile Food Facility Permit dataset published by DataSF.
pub const DEFAULT_DATASET_URL: &str = "https://data.sfgov.org/resource/6a9r-agq8.json";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("dataset is not a JSON array: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),
}

/// Vehicles decoded from a dataset document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub vehicles: Vec<Vehicle>,
    pub skipped: usize,
}

/// Outcome of loading a dataset into a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Decode a dataset document, skipping records that are not usable.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, IngestError> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    Ok(decode_records(records))
}

fn decode_records(records: Vec<serde_json::Value>) -> Dataset {
    let mut dataset = Dataset::default();
    for (position, value) in records.into_iter().enumerate() {
        match RawRecord::decode(value) {
            Ok(vehicle) => dataset.vehicles.push(vehicle),
            Err(reason) => {
                warn!(position, %reason, "skipping dataset record");
                dataset.skipped += 1;
            }
        }
    }
    dataset
}

/// Add every vehicle to `store`.
pub fn load_into<S: VehicleStore + ?Sized>(
    store: &S,
    dataset: Dataset,
) -> Result<IngestReport, StoreError> {
    let report = IngestReport {
        loaded: dataset.vehicles.len(),
        skipped: dataset.skipped,
    };
    for vehicle in dataset.vehicles {
        store.add(vehicle)?;
    }
    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        "loaded vehicle dataset"
    );
    Ok(report)
}

/// Decode `bytes` and load the result into `store`.
pub fn ingest_slice<S: VehicleStore + ?Sized>(
    store: &S,
    bytes: &[u8],
) -> Result<IngestReport, IngestError> {
    let dataset = parse_dataset(bytes)?;
    Ok(load_into(store, dataset)?)
}

/// Decode a dataset from `reader` and load it into `store`.
pub fn ingest_reader<S: VehicleStore + ?Sized, R: Read>(
    store: &S,
    reader: R,
) -> Result<IngestReport, IngestError> {
    let records: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    Ok(load_into(store, decode_records(records))?)
}
