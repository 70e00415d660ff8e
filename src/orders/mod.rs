//! Order service integration.
//!
//! # Data Flow
//! ```text
//! order id
//!     → client.rs (URL: {base}/orders/{id}?expired=NO)
//!     → RestClient (fault translation installed)
//!     → types.rs (OrderInfo) or ClientError::Remote with the server's text
//! ```

pub mod client;
pub mod types;

pub use client::OrderServiceClient;
pub use types::OrderInfo;
