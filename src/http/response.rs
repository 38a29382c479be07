// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::cookie::Cookie;
use super::headers;
use crate::error::{Error, Result};

/// HTTP response representation, body fully read
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers as received
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL (after redirects followed by the transport)
    pub url: Url,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes, url: Url) -> Self {
        Self {
            status,
            headers,
            body,
            url,
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get body as text
    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse body as JSON, keeping the raw body in the error
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| Error::decode(&self.body, e))
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(headers::CONTENT_TYPE)
    }

    /// Cookies set by this response, in header order
    pub fn cookies(&self) -> Vec<Cookie> {
        self.header_all(headers::SET_COOKIE)
            .into_iter()
            .filter_map(Cookie::parse)
            .collect()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(headers: HeaderMap, body: &'static str) -> Response {
        Response::new(
            StatusCode::OK,
            headers,
            Bytes::from(body),
            Url::parse("https://example.com").unwrap(),
        )
    }

    #[test]
    fn test_response_text() {
        let resp = response(HeaderMap::new(), "Hello, World!");
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.text().unwrap(), "Hello, World!");
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(&[0xff, 0xfe]),
            Url::parse("https://example.com").unwrap(),
        );
        assert!(matches!(resp.text(), Err(Error::Utf8(_))));
        assert_eq!(resp.text_lossy(), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_response_cookies_in_order() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("b=2; Path=/"));
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("garbage"));

        let names: Vec<String> = response(headers, "")
            .cookies()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_json_decode_error_keeps_body() {
        let resp = response(HeaderMap::new(), "not json");
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(err.to_string().contains("not json"));
    }
}
