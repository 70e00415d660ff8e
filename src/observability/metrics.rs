//! Client metrics.
//!
//! # Metrics
//! - `order_client_requests_total` (counter): responses by method, status
//! - `order_client_request_duration_seconds` (histogram): exchange latency
//! - `order_client_faults_total` (counter): errors by fault kind
//!
//! Recorded through the `metrics` facade; the embedding application installs
//! the recorder/exporter.

use std::time::Instant;

use reqwest::{Method, StatusCode};

use crate::http::types::FaultKind;

/// Record one exchange.
///
/// Latency is recorded for every exchange. The request counter only counts
/// exchanges that produced a status, so transport and body-read failures show
/// up in the histogram and in `order_client_faults_total`.
pub fn record_request(method: &Method, status: Option<StatusCode>, start: Instant) {
    let duration = start.elapsed().as_secs_f64();

    ::metrics::histogram!(
        "order_client_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(duration);

    if let Some(status) = status {
        ::metrics::counter!(
            "order_client_requests_total",
            "method" => method.to_string(),
            "status" => status.as_u16().to_string()
        )
        .increment(1);
    }
}

/// Record a fault returned to the caller.
pub fn record_fault(kind: FaultKind) {
    ::metrics::counter!("order_client_faults_total", "kind" => kind.as_str()).increment(1);
}
