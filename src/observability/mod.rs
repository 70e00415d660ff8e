//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport.rs → tracing events (request id, method, url, status)
//! client.rs    → metrics.rs (request counters, latency, faults)
//! main.rs      → logging.rs (subscriber setup)
//! ```

pub mod logging;
pub mod metrics;
