//! Food truck catalog service.
//!
//! Loads the DataSF permit dataset at startup and serves it over HTTP. If the
//! startup load fails, catalog requests keep retrying it until one succeeds.
//! Configure with `FOOD_TRUCKS_BIND_ADDR`, `FOOD_TRUCKS_DATASET_URL` and
//! `RUST_LOG`.

use std::sync::Arc;

use food_trucks::ingest::Ingestor;
use food_trucks::{http, InMemoryVehicleStore, ServiceConfig};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ServiceConfig::from_env();
    tracing::info!(?config, "starting food truck service");

    let ingestor = Arc::new(Ingestor::new(
        InMemoryVehicleStore::new(),
        config.dataset_url.as_str(),
    ));
    if let Err(err) = ingestor.ensure_loaded().await {
        tracing::error!(error = %err, "dataset ingestion failed; retrying on the next request");
    }

    http::serve_with_ingestor(ingestor, &config.bind_addr).await?;
    Ok(())
}
