//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gate_requests_total` (counter): root requests by decision
//! - `gate_request_duration_seconds` (histogram): handler latency by decision
//!
//! # Design Decisions
//! - Macros are no-ops until a recorder is installed, so tests need no setup
//! - Prometheus exporter is optional and runs its own listener

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::negotiate::Decision;

/// Install the Prometheus recorder and scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled root request.
pub fn record_request(decision: Decision, start_time: Instant) {
    let label = decision.as_str();
    metrics::counter!("gate_requests_total", "decision" => label).increment(1);
    metrics::histogram!("gate_request_duration_seconds", "decision" => label)
        .record(start_time.elapsed().as_secs_f64());
}
