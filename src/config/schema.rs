//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the order client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Remote order service settings.
    pub order_service: OrderServiceConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote order service settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderServiceConfig {
    /// Base URL (e.g., "http://localhost:8080").
    pub url: String,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            user_agent: concat!("order-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Timeouts enforced by the transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total time for request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
