// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request representation

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::error::{Error, Result};

/// HTTP request handed to a [`Transport`](super::Transport)
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
    target: String,
}

impl Request {
    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method,
            url: Url::parse(url.as_ref())?,
            headers: HeaderMap::new(),
            body: None,
            target: url.as_ref().to_string(),
        })
    }

    /// Create a new GET request
    pub fn get(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    /// Set a header, replacing any previous value
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        self.set_header(name, value)?;
        Ok(self)
    }

    /// Set a header in place, replacing any previous value
    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<()> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::invalid_request(format!("header name {:?}: {}", name.as_ref(), e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::invalid_request(format!("header {}: {}", name, e)))?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get a header value
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The URL as it was given, before normalization
    pub fn url_str(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let req = Request::get("https://example.com/path").unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.host_str(), Some("example.com"));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_request_headers_replace() {
        let req = Request::get("https://example.com")
            .unwrap()
            .header("X-Custom", "one")
            .unwrap()
            .header("x-custom", "two")
            .unwrap();
        assert_eq!(req.header_value("x-custom"), Some("two"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_invalid_header_is_construction_error() {
        let err = Request::get("https://example.com")
            .unwrap()
            .header("bad header", "v")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_url_str_keeps_given_form() {
        let req = Request::get("http://example.com").unwrap();
        assert_eq!(req.url_str(), "http://example.com");
        assert_eq!(req.url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_malformed_url() {
        assert!(matches!(Request::post("://nope"), Err(Error::Url(_))));
    }
}
