//! REST client with response error handling installed.

use std::time::Instant;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tower::{Service, ServiceBuilder, ServiceExt};

use crate::config::ClientConfig;
use crate::http::error_handler::{FaultTranslation, FaultTranslationLayer, ResponseErrorHandler};
use crate::http::request::OutboundRequest;
use crate::http::response::InboundResponse;
use crate::http::transport::ReqwestTransport;
use crate::http::types::{ClientError, ClientResult};
use crate::observability::metrics;

/// Cheap-to-clone client; each exchange runs on its own clone of the service stack.
#[derive(Debug, Clone)]
pub struct RestClient<S = FaultTranslation<ReqwestTransport>> {
    service: S,
}

impl RestClient {
    /// `reqwest` transport with the default [`FaultTranslator`](crate::http::FaultTranslator).
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let transport =
            ReqwestTransport::from_config(&config.timeouts, &config.order_service.user_agent)?;
        Ok(Self::new(
            ServiceBuilder::new()
                .layer(FaultTranslationLayer::new())
                .service(transport),
        ))
    }
}

impl<T, H: ResponseErrorHandler> RestClient<FaultTranslation<T, H>> {
    /// Install a custom error handler in front of `transport`.
    pub fn with_error_handler(transport: T, handler: H) -> Self {
        Self {
            service: FaultTranslation::new(transport, handler),
        }
    }
}

impl<S> RestClient<S>
where
    S: Service<OutboundRequest, Response = InboundResponse, Error = ClientError> + Clone,
{
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Run one request through the stack.
    pub async fn exchange(&self, request: OutboundRequest) -> ClientResult<InboundResponse> {
        let start = Instant::now();
        let method = request.method().clone();
        let result = self.service.clone().oneshot(request).await;

        record_outcome(&method, &result, start);
        result
    }

    /// Run one request and decode a success body as JSON.
    pub async fn exchange_json<R: DeserializeOwned>(&self, request: OutboundRequest) -> ClientResult<R> {
        self.exchange(request).await?.json().await
    }

    /// Like [`exchange_json`](Self::exchange_json), but an empty body yields `None`.
    pub async fn exchange_json_opt<R: DeserializeOwned>(
        &self,
        request: OutboundRequest,
    ) -> ClientResult<Option<R>> {
        self.exchange(request).await?.json_opt().await
    }
}

/// Record latency for every exchange, plus the status and fault kind when known.
fn record_outcome(method: &Method, result: &ClientResult<InboundResponse>, start: Instant) {
    match result {
        Ok(response) => metrics::record_request(method, Some(response.status()), start),
        Err(e) => {
            metrics::record_request(method, e.status(), start);
            metrics::record_fault(e.kind());
        }
    }
}
