//! HTTP transport for the vehicle catalog.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /foodtrucks`: every stored vehicle as a JSON array.
//! - `GET /foodtrucks/query?status=&latitude=&longitude=&radius=&radius_unit=`:
//!   vehicles matching the status (default: all), narrowed to the circle
//!   when all four geometry parameters are present and valid.
//! - `GET /health`: `{ "ok": true, "vehicles": <count> }`.
//!
//! A router built with [`router_with_ingestor`] retries the dataset load at
//! the start of every catalog request until one load succeeds.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use food_trucks::{http, InMemoryVehicleStore};
//!
//! let store = Arc::new(InMemoryVehicleStore::new());
//! http::serve(store, "0.0.0.0:8080").await?;
//! ```

mod params;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info, warn};

use crate::error::StoreError;
use crate::ingest::Ingestor;
use crate::store::VehicleStore;
use crate::vehicle::Vehicle;

pub use params::{GeometryError, QueryParams};

/// Handler state: the store, plus the ingestor that fills it when the
/// dataset is loaded lazily.
struct AppState<S> {
    store: Arc<S>,
    ingestor: Option<Arc<Ingestor<S>>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            ingestor: self.ingestor.clone(),
        }
    }
}

impl<S: VehicleStore> AppState<S> {
    /// Attempt the dataset load if it has not succeeded yet. A failure is
    /// logged and the request is answered from what the store holds.
    async fn ensure_loaded(&self) {
        let Some(ingestor) = &self.ingestor else {
            return;
        };
        if let Err(err) = ingestor.ensure_loaded().await {
            warn!(error = %err, "dataset still not loaded; serving current catalog");
        }
    }
}

/// Build an axum `Router` serving queries against `store`.
pub fn router<S: VehicleStore + 'static>(store: Arc<S>) -> Router {
    routes(AppState {
        store,
        ingestor: None,
    })
}

/// Build an axum `Router` over the ingestor's store. Catalog requests retry
/// the ingestor's load until it succeeds once.
pub fn router_with_ingestor<S: VehicleStore + Clone + 'static>(
    ingestor: Arc<Ingestor<S>>,
) -> Router {
    routes(AppState {
        store: Arc::new(ingestor.store().clone()),
        ingestor: Some(ingestor),
    })
}

fn routes<S: VehicleStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route("/foodtrucks", get(list_handler::<S>))
        .route("/foodtrucks/query", get(query_handler::<S>))
        .with_state(state)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<S: VehicleStore + 'static>(
    store: Arc<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    bind_and_serve(router(store), addr).await
}

/// Like [`serve`], loading the dataset through `ingestor` on demand.
pub async fn serve_with_ingestor<S: VehicleStore + Clone + 'static>(
    ingestor: Arc<Ingestor<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    bind_and_serve(router_with_ingestor(ingestor), addr).await
}

async fn bind_and_serve(app: Router, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving vehicle catalog");
    axum::serve(listener, app).await
}

struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "store request failed");
        let body = json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// `GET /health`
async fn health_handler<S: VehicleStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicles = state.store.len()?;
    Ok(Json(json!({ "ok": true, "vehicles": vehicles })))
}

/// `GET /foodtrucks`
async fn list_handler<S: VehicleStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    state.ensure_loaded().await;
    Ok(Json(state.store.get_all()?))
}

/// `GET /foodtrucks/query`
async fn query_handler<S: VehicleStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    state.ensure_loaded().await;
    let query = params.to_query();
    Ok(Json(state.store.query(&query)?))
}
