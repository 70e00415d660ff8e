//! Inbound response model.
//!
//! # Responsibilities
//! - Expose status and headers without touching the body
//! - Hand the single-read body to exactly one consumer

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::http::body::ResponseBody;
use crate::http::types::ClientResult;

/// A completed HTTP response whose body has not been read yet.
#[derive(Debug)]
pub struct InboundResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl InboundResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: ResponseBody) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Take the body, dropping status and headers.
    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, ResponseBody) {
        (self.status, self.headers, self.body)
    }

    /// Read the body as text.
    pub async fn text(self) -> ClientResult<String> {
        self.body.text().await
    }

    /// Decode the body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> ClientResult<T> {
        self.body.json().await
    }

    /// Decode the body as JSON, or `None` when the body is empty.
    pub async fn json_opt<T: DeserializeOwned>(self) -> ClientResult<Option<T>> {
        let bytes = self.body.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
