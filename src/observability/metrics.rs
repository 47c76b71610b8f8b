//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ai_requests_total` (counter): requests by method, endpoint, status
//! - `ai_request_duration_seconds` (histogram): latency by method, endpoint
//! - `ai_validation_failures_total` (counter): rejected payloads by endpoint
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed, so tests need no setup
//! - Endpoint labels come from the fixed endpoint table, never raw paths

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::Endpoint;

/// Label used for requests that matched no endpoint.
pub const UNMATCHED: &str = "unmatched";

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, endpoint: &'static str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("ai_requests_total", &labels).increment(1);

    let labels = [
        ("method", method.to_string()),
        ("endpoint", endpoint.to_string()),
    ];
    metrics::histogram!("ai_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_validation_failure(endpoint: &'static str) {
    metrics::counter!("ai_validation_failures_total", "endpoint" => endpoint).increment(1);
}

/// Middleware recording count and latency of every request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let endpoint = Endpoint::match_request(&method, request.uri().path())
        .map(Endpoint::label)
        .unwrap_or(UNMATCHED);

    let response = next.run(request).await;
    record_request(method.as_str(), endpoint, response.status().as_u16(), start);
    response
}
