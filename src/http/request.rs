//! Outbound request model.
//!
//! # Responsibilities
//! - Hold method, target URL, headers and optional body for one call
//! - Build URLs with form-encoded query parameters
//!
//! # Design Decisions
//! - A built request is immutable; only the builder mutates
//! - Bodies are `Bytes` so the transport can hand them over without copying

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::http::types::{ClientError, ClientResult};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// A fully described outbound HTTP call.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl OutboundRequest {
    /// Start a request with an explicit method.
    pub fn builder(method: Method, url: Url) -> OutboundRequestBuilder {
        OutboundRequestBuilder {
            request: Self {
                method,
                url,
                headers: HeaderMap::new(),
                body: None,
            },
        }
    }

    pub fn get(url: Url) -> OutboundRequestBuilder {
        Self::builder(Method::GET, url)
    }

    pub fn post(url: Url) -> OutboundRequestBuilder {
        Self::builder(Method::POST, url)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Split into owned parts for the transport.
    pub fn into_parts(self) -> (Method, Url, HeaderMap, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for [`OutboundRequest`].
#[derive(Debug)]
pub struct OutboundRequestBuilder {
    request: OutboundRequest,
}

impl OutboundRequestBuilder {
    /// Append a query parameter (form-encoded).
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.request.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: &str, value: &str) -> ClientResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidRequest(format!("header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidRequest(format!("header '{}': {}", name, e)))?;
        self.request.headers.insert(name, value);
        Ok(self)
    }

    /// Set a raw body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> ClientResult<Self> {
        let body = serde_json::to_vec(value)?;
        self.request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.request.body = Some(Bytes::from(body));
        Ok(self)
    }

    pub fn build(self) -> OutboundRequest {
        self.request
    }
}
