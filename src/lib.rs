//! Order service client library.
//!
//! HTTP client whose transport has a response error handler installed:
//! 4xx/5xx responses become [`ClientError::Remote`] carrying the server's
//! error text, everything else passes through with its body unread.

pub mod config;
pub mod http;
pub mod observability;
pub mod orders;

pub use config::ClientConfig;
pub use http::{ClientError, ClientResult, FaultKind, RestClient};
pub use orders::{OrderInfo, OrderServiceClient};
