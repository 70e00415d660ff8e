//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → request.rs (OutboundRequest: method, URL, query, body)
//!     → client.rs (RestClient::exchange)
//!     → error_handler.rs (FaultTranslation layer)
//!     → transport.rs (reqwest, timeouts, x-request-id)
//!     ← response.rs (InboundResponse, body unread)
//!     ← error_handler.rs (4xx/5xx → ClientError::Remote)
//!     ← caller sees a response or a typed fault
//! ```

pub mod body;
pub mod client;
pub mod error_handler;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use body::ResponseBody;
pub use client::RestClient;
pub use error_handler::{FaultTranslation, FaultTranslationLayer, FaultTranslator, ResponseErrorHandler};
pub use request::{OutboundRequest, OutboundRequestBuilder, X_REQUEST_ID};
pub use response::InboundResponse;
pub use transport::ReqwestTransport;
pub use types::{ClientError, ClientResult, FaultKind};
