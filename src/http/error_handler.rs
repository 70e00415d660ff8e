//! Response error handling.
//!
//! # Data Flow
//! ```text
//! OutboundRequest
//!     → inner transport (ReqwestTransport)
//!     → InboundResponse
//!     → ResponseErrorHandler::has_error(status)?
//!         no  → response passed through, body untouched
//!         yes → handle_error reads the body once → ClientError::Remote
//! ```
//!
//! # Design Decisions
//! - The hook is stateless; each call is independent
//! - No retries and no logging here, callers decide what to do with a fault
//! - A failed body read stays a `BodyRead` error, never a `Remote` one

use std::future::Future;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use reqwest::StatusCode;
use tower::{Layer, Service};

use crate::http::request::OutboundRequest;
use crate::http::response::InboundResponse;
use crate::http::types::{ClientError, ClientResult};

/// Hook deciding whether a response is an error and turning it into one.
pub trait ResponseErrorHandler: Clone + Send + Sync + 'static {
    /// Whether `status` should be translated. Defaults to the 4xx and 5xx ranges.
    fn has_error(&self, status: StatusCode) -> bool {
        status.is_client_error() || status.is_server_error()
    }

    /// Consume an error response and produce the fault to return instead.
    fn handle_error(&self, response: InboundResponse) -> impl Future<Output = ClientError> + Send;
}

/// Default handler: the fault message is the response body with lines joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultTranslator;

impl ResponseErrorHandler for FaultTranslator {
    async fn handle_error(&self, response: InboundResponse) -> ClientError {
        let status = response.status();
        match response.into_body().text().await {
            Ok(text) => ClientError::Remote {
                status,
                body: join_lines(&text),
            },
            Err(e) => e,
        }
    }
}

/// Concatenate the physical lines of `text`, dropping `\n`, `\r\n` and `\r`.
pub fn join_lines(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Pass `response` through, or replace it with the handler's fault.
pub async fn translate<H>(handler: &H, response: InboundResponse) -> ClientResult<InboundResponse>
where
    H: ResponseErrorHandler,
{
    if !handler.has_error(response.status()) {
        return Ok(response);
    }
    Err(handler.handle_error(response).await)
}

/// Installs a [`ResponseErrorHandler`] in front of a transport.
#[derive(Debug, Clone)]
pub struct FaultTranslationLayer<H = FaultTranslator> {
    handler: H,
}

impl FaultTranslationLayer<FaultTranslator> {
    pub fn new() -> Self {
        Self {
            handler: FaultTranslator,
        }
    }
}

impl Default for FaultTranslationLayer<FaultTranslator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ResponseErrorHandler> FaultTranslationLayer<H> {
    pub fn with_handler(handler: H) -> Self {
        Self { handler }
    }
}

impl<S, H: Clone> Layer<S> for FaultTranslationLayer<H> {
    type Service = FaultTranslation<S, H>;

    fn layer(&self, inner: S) -> Self::Service {
        FaultTranslation {
            inner,
            handler: self.handler.clone(),
        }
    }
}

/// Transport wrapped with a [`ResponseErrorHandler`].
#[derive(Debug, Clone)]
pub struct FaultTranslation<S, H = FaultTranslator> {
    inner: S,
    handler: H,
}

impl<S, H> FaultTranslation<S, H> {
    pub fn new(inner: S, handler: H) -> Self {
        Self { inner, handler }
    }
}

impl<S, H> Service<OutboundRequest> for FaultTranslation<S, H>
where
    S: Service<OutboundRequest, Response = InboundResponse, Error = ClientError>,
    S::Future: Send + 'static,
    H: ResponseErrorHandler,
{
    type Response = InboundResponse;
    type Error = ClientError;
    type Future = BoxFuture<'static, ClientResult<InboundResponse>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: OutboundRequest) -> Self::Future {
        let handler = self.handler.clone();
        let response = self.inner.call(request);
        Box::pin(async move {
            let response = response.await?;
            translate(&handler, response).await
        })
    }
}
