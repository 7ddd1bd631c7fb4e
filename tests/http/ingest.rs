use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use food_trucks::ingest::{fetch_dataset, Ingestor};
use food_trucks::{http, IngestError, IngestReport, InMemoryVehicleStore, VehicleStore};
use serde_json::Value;

use crate::support::{sorted_ids, start};

const DATASET: &str = r#"[
    {"objectid": "101", "applicant": "Senor Sisig", "status": "APPROVED",
     "latitude": "37.7989", "longitude": "-122.3991"},
    {"objectid": "102", "applicant": "Bacon Bacon", "status": "REQUESTED",
     "latitude": "37.7749", "longitude": "-122.4194"},
    {"objectid": "103", "applicant": "Ghost Kitchen", "status": "HAUNTED",
     "latitude": "37.7", "longitude": "-122.4"}
]"#;

/// A dataset endpoint that counts how often it was hit.
async fn dataset_server() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/dataset.json",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                DATASET
            }
        }),
    );
    (start(app).await, hits)
}

/// A dataset endpoint that fails its first request and serves the document
/// afterwards.
async fn flaky_dataset_server() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/dataset.json",
        get(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    (StatusCode::SERVICE_UNAVAILABLE, "")
                } else {
                    (StatusCode::OK, DATASET)
                }
            }
        }),
    );
    (start(app).await, hits)
}

async fn get_json(url: String) -> Value {
    let response = reqwest::get(url).await.unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

#[tokio::test]
async fn fetch_returns_document_bytes() {
    let (base, _) = dataset_server().await;
    let body = fetch_dataset(&reqwest::Client::new(), &format!("{base}/dataset.json"))
        .await
        .unwrap();
    assert_eq!(body, DATASET.as_bytes());
}

#[tokio::test]
async fn ingestor_loads_once() {
    let (base, hits) = dataset_server().await;
    let store = InMemoryVehicleStore::new();
    let ingestor = Ingestor::new(store.clone(), format!("{base}/dataset.json"));

    let first = ingestor.ensure_loaded().await.unwrap();
    assert_eq!(first, IngestReport { loaded: 2, skipped: 1 });
    assert_eq!(store.len().unwrap(), 2);
    assert!(store.exists(101).unwrap());

    let second = ingestor.ensure_loaded().await.unwrap();
    assert_eq!(second, first);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(ingestor.report(), Some(first));
}

#[tokio::test]
async fn failed_fetch_is_retried() {
    let (base, hits) = dataset_server().await;
    let ingestor = Ingestor::new(InMemoryVehicleStore::new(), format!("{base}/missing.json"));

    let err = ingestor.ensure_loaded().await.unwrap_err();
    assert!(matches!(err, IngestError::Fetch(_)));
    assert!(ingestor.report().is_none());
    assert!(ingestor.store().is_empty().unwrap());
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    assert!(ingestor.ensure_loaded().await.is_err());
}

#[tokio::test]
async fn catalog_requests_retry_failed_startup_load() {
    let (base, hits) = flaky_dataset_server().await;
    let ingestor = Arc::new(Ingestor::new(
        InMemoryVehicleStore::new(),
        format!("{base}/dataset.json"),
    ));

    // startup attempt hits the 503
    assert!(matches!(
        ingestor.ensure_loaded().await,
        Err(IngestError::Fetch(_))
    ));
    assert!(ingestor.store().is_empty().unwrap());

    let catalog = start(http::router_with_ingestor(ingestor.clone())).await;

    let body = get_json(format!("{catalog}/foodtrucks")).await;
    assert_eq!(sorted_ids(&body), vec![101, 102]);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(ingestor.report(), Some(IngestReport { loaded: 2, skipped: 1 }));

    let body = get_json(format!("{catalog}/foodtrucks/query?status=approved")).await;
    assert_eq!(sorted_ids(&body), vec![101]);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn catalog_serves_empty_list_while_dataset_is_down() {
    let (base, hits) = dataset_server().await;
    let ingestor = Arc::new(Ingestor::new(
        InMemoryVehicleStore::new(),
        format!("{base}/missing.json"),
    ));
    let catalog = start(http::router_with_ingestor(ingestor.clone())).await;

    for _ in 0..2 {
        let body = get_json(format!("{catalog}/foodtrucks")).await;
        assert_eq!(body, serde_json::json!([]));
    }
    assert!(ingestor.report().is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
