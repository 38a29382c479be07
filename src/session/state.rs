// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Mutable session state and the hooks that update it

use crate::http::{headers, CookieJar, Request, Response};
use crate::network::RequestHooks;

use super::headers::HeaderPolicy;
use super::resolver::UrlResolver;

/// Everything the request hooks read or write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Scheme, host and host learning
    pub resolver: UrlResolver,
    /// Last visited absolute URL; empty before the first round trip
    pub referer: String,
    /// Session cookies
    pub cookies: CookieJar,
    /// Default and custom headers
    pub headers: HeaderPolicy,
}

impl SessionState {
    /// Create state for a host
    pub fn new(host: impl Into<String>, https: bool) -> Self {
        Self {
            resolver: UrlResolver::new(host, https),
            ..Default::default()
        }
    }

    fn insert_referer(&self, request: &mut Request) {
        if self.referer.is_empty() {
            return;
        }
        if let Err(e) = request.set_header(headers::REFERER, &self.referer) {
            tracing::warn!("Skipping referer header: {}", e);
        }
    }
}

impl RequestHooks for SessionState {
    fn before_send(&mut self, request: &mut Request) {
        self.headers.apply(request, &self.resolver.origin());
        self.cookies.attach(request);
        self.insert_referer(request);

        tracing::trace!(
            method = %request.method,
            url = %request.url,
            cookies = self.cookies.len(),
            "Prepared request"
        );
    }

    fn after_send(&mut self, response: &Response, request: &Request) {
        self.cookies.merge(response.cookies());
        self.referer = request.url_str().to_string();
    }
}
