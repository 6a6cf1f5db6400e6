use axum_test::TestServer;
use sentrix::core::http::{create_router, AppState, HealthStatus};
use sentrix::metrics::Metrics;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

fn test_state() -> AppState {
    AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: Arc::new(Metrics::new().unwrap()),
        start_time: Arc::new(Instant::now()),
    }
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let server = TestServer::new(create_router(test_state())).unwrap();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "sentrix-scanner");
    assert!(body["uptime_seconds"].is_number());
}

#[tokio::test]
async fn metrics_endpoint_exports_scanner_counters() {
    let server = TestServer::new(create_router(test_state())).unwrap();
    let response = server.get("/metrics").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("scan_cycles_total"));
    assert!(body.contains("signals_total"));
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let server = TestServer::new(create_router(test_state())).unwrap();
    let response = server.get("/nope").await;
    response.assert_status_not_found();
}
