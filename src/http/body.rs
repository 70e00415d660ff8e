//! Single-read response body.
//!
//! # Design Decisions
//! - The body is a forward-only stream of chunks, never a reusable buffer
//! - Every read method takes `self`, so a body can be consumed at most once
//! - Dropping the body releases the underlying connection stream

use std::fmt;
use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::stream::{self, Stream, StreamExt};
use serde::de::DeserializeOwned;

use crate::http::types::{ClientError, ClientResult};

type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// A response body that can be read exactly once.
pub struct ResponseBody {
    stream: ByteStream,
}

impl ResponseBody {
    /// Wrap a chunk stream.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self {
            stream: Box::pin(stream),
        }
    }

    /// A body backed by bytes already in memory.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Self::empty();
        }
        Self::from_stream(stream::once(async move { Ok(bytes) }))
    }

    /// A body with no content.
    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    /// Read the stream to completion.
    ///
    /// A chunk error aborts the read and surfaces as [`ClientError::BodyRead`].
    pub async fn bytes(mut self) -> ClientResult<Bytes> {
        let mut buf = Vec::new();
        while let Some(chunk) = self.stream.next().await {
            let chunk = chunk.map_err(ClientError::BodyRead)?;
            buf.extend_from_slice(&chunk);
        }
        Ok(Bytes::from(buf))
    }

    /// Read the stream to completion as UTF-8 text, replacing invalid sequences.
    pub async fn text(self) -> ClientResult<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read the stream to completion and decode it as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> ClientResult<T> {
        let bytes = self.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBody").finish_non_exhaustive()
    }
}
