//! Remote dataset download. Requires the `http` feature.

use tokio::sync::OnceCell;
use tracing::info;

use super::{ingest_slice, IngestError, IngestReport};
use crate::store::VehicleStore;

/// Download the dataset document at `url`.
pub async fn fetch_dataset(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, IngestError> {
    let fetch_error = |e: reqwest::Error| IngestError::Fetch(e.to_string());
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(fetch_error)?;
    let body = response.bytes().await.map_err(fetch_error)?;
    info!(url, bytes = body.len(), "fetched vehicle dataset");
    Ok(body.to_vec())
}

/// Loads a remote dataset into a store at most once.
///
/// A failed attempt leaves the ingestor unloaded, so the next call retries.
pub struct Ingestor<S> {
    store: S,
    url: String,
    client: reqwest::Client,
    loaded: OnceCell<IngestReport>,
}

impl<S: VehicleStore> Ingestor<S> {
    pub fn new(store: S, url: impl Into<String>) -> Self {
        Self {
            store,
            url: url.into(),
            client: reqwest::Client::new(),
            loaded: OnceCell::new(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Fetch and load the dataset unless an earlier call already did.
    pub async fn ensure_loaded(&self) -> Result<IngestReport, IngestError> {
        self.loaded
            .get_or_try_init(|| async {
                let body = fetch_dataset(&self.client, &self.url).await?;
                ingest_slice(&self.store, &body)
            })
            .await
            .copied()
    }

    pub fn report(&self) -> Option<IngestReport> {
        self.loaded.get().copied()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
