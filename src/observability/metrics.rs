//! Metrics collection and exposition.
//!
//! # Metrics
//! - `nibble_auth_decisions_total` (counter): decisions by outcome
//! - `nibble_auth_decision_duration_seconds` (histogram): time per decision,
//!   including the fixed auth delay
//! - `nibble_auth_config_errors_total` (counter): config load failures by kind
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_decision(outcome: &'static str, start: Instant) {
    metrics::counter!("nibble_auth_decisions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("nibble_auth_decision_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_config_error(kind: &'static str) {
    metrics::counter!("nibble_auth_config_errors_total", "kind" => kind).increment(1);
}
