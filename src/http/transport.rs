//! HTTP transport over `reqwest`.
//!
//! # Responsibilities
//! - Turn an [`OutboundRequest`] into a wire request
//! - Propagate the caller's `x-request-id`, or tag the call with a fresh one
//! - Return the response with its body still unread
//!
//! # Design Decisions
//! - Exposed as a `tower::Service` so error handling is layered on, not baked in
//! - Connect and request timeouts are the transport's job

use std::io;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::TryStreamExt;
use reqwest::header::{HeaderMap, HeaderValue};
use tower::Service;
use uuid::Uuid;

use crate::config::TimeoutConfig;
use crate::http::body::ResponseBody;
use crate::http::request::{OutboundRequest, X_REQUEST_ID};
use crate::http::response::InboundResponse;
use crate::http::types::{ClientError, ClientResult};

/// `tower::Service` that performs requests with a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Use an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with the configured timeouts and user agent.
    pub fn from_config(timeouts: &TimeoutConfig, user_agent: &str) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self::new(client))
    }
}

impl Service<OutboundRequest> for ReqwestTransport {
    type Response = InboundResponse;
    type Error = ClientError;
    type Future = BoxFuture<'static, ClientResult<InboundResponse>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: OutboundRequest) -> Self::Future {
        let client = self.client.clone();
        Box::pin(send(client, request))
    }
}

/// Reuse the caller's `x-request-id` if it has one, otherwise set a fresh UUID v4.
///
/// Returns the ID that will be sent.
pub fn ensure_request_id(headers: &mut HeaderMap) -> String {
    if let Some(existing) = headers.get(X_REQUEST_ID).and_then(|v| v.to_str().ok()) {
        return existing.to_string();
    }

    let request_id = Uuid::new_v4().to_string();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(X_REQUEST_ID, value);
    }
    request_id
}

async fn send(client: reqwest::Client, request: OutboundRequest) -> ClientResult<InboundResponse> {
    let (method, url, mut headers, body) = request.into_parts();
    let request_id = ensure_request_id(&mut headers);

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        url = %url,
        "Sending request"
    );

    let mut builder = client.request(method, url).headers(headers);
    if let Some(body) = body {
        builder = builder.body(body);
    }

    let response = builder.send().await?;
    let status = response.status();
    let headers = response.headers().clone();

    tracing::debug!(request_id = %request_id, status = %status, "Response received");

    let body = ResponseBody::from_stream(response.bytes_stream().map_err(io::Error::other));
    Ok(InboundResponse::new(status, headers, body))
}
