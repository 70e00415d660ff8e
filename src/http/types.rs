//! Client error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the order client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a 4xx/5xx status.
    ///
    /// The message is the verbatim response body with line breaks removed.
    #[error("{body}")]
    Remote { status: StatusCode, body: String },

    /// Reading the response body failed part way through.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] std::io::Error),

    /// The transport could not complete the exchange (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be assembled.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A success body was not the JSON we expected.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse category of a [`ClientError`], used for branching and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    Remote,
    Io,
    Transport,
    Request,
    Decode,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::Remote => "remote",
            FaultKind::Io => "io",
            FaultKind::Transport => "transport",
            FaultKind::Request => "request",
            FaultKind::Decode => "decode",
        }
    }
}

impl ClientError {
    /// Category of this error.
    pub fn kind(&self) -> FaultKind {
        match self {
            ClientError::Remote { .. } => FaultKind::Remote,
            ClientError::BodyRead(_) => FaultKind::Io,
            ClientError::Transport(_) => FaultKind::Transport,
            ClientError::InvalidUrl(_) | ClientError::InvalidRequest(_) => FaultKind::Request,
            ClientError::Decode(_) => FaultKind::Decode,
        }
    }

    /// Status code of a remote fault.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied error text of a remote fault.
    pub fn remote_body(&self) -> Option<&str> {
        match self {
            ClientError::Remote { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Remote { .. })
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
