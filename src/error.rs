// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the fetcher session
//!
//! Errors fall into a few classes: request construction (bad URL or header),
//! transport failures, body decoding, unexpected status codes and the
//! session blob codec. Only transport failures are ever retried.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for fetcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fetcher session
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed inside reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request could not be built (bad method, header, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure reported by a non-reqwest transport
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout error
    #[error("Operation timed out after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
        url: Option<String>,
    },

    /// Structured body could not be decoded
    #[error("Failed to decode response body {body:?}: {source}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Response status outside the 2xx range where success was required
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session blob is not valid base64
    #[error("Invalid session blob: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Response body is not valid UTF-8
    #[error("Response body is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Redirect chain longer than the configured limit
    #[error("Stopped after {max} redirects at {url}")]
    TooManyRedirects { max: usize, url: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a request construction error
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        Error::InvalidRequest(msg.into())
    }

    /// Create a timeout error with URL
    pub fn timeout_with_url(
        operation: impl Into<String>,
        duration_ms: u64,
        url: impl Into<String>,
    ) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration_ms,
            url: Some(url.into()),
        }
    }

    /// Create a decode error carrying the raw body text
    pub fn decode(body: &[u8], source: serde_json::Error) -> Self {
        Error::Decode {
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: StatusCode, url: impl Into<String>) -> Self {
        Error::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the error came from the transport rather than from building
    /// the request or reading the result
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Network(_) | Error::Timeout { .. } => true,
            Error::Http(e) => !e.is_builder(),
            _ => false,
        }
    }

    /// Check if this is a body decoding error
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(status.as_u16()),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::UnexpectedStatus { url, .. } => Some(url),
            Error::TooManyRedirects { url, .. } => Some(url),
            Error::Timeout { url: Some(u), .. } => Some(u),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}
