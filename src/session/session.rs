// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser-like HTTP session
//!
//! A [`Session`] keeps cookies, a rolling referer and default headers across
//! requests and can serve repeated GETs from a TTL cache. It is a single
//! sequential user of its transport: every operation takes `&mut self` and
//! runs one request to completion, following redirects hop by hop so each
//! hop sees the session cookies and feeds `Set-Cookie` back into the jar.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;

use super::cache::{CacheKey, ResponseCache};
use super::config::SessionConfig;
use super::form::FormValues;
use super::snapshot::SessionSnapshot;
use super::state::SessionState;
use crate::error::{Error, Result};
use crate::http::{
    headers, CookieJar, ReqwestTransport, Request, Response, Transport, TransportConfig,
    FORM_CONTENT_TYPE,
};
use crate::network::RequestDecorator;

/// Stateful HTTP session over a [`Transport`]
#[derive(Debug)]
pub struct Session<T = ReqwestTransport> {
    state: SessionState,
    cache: ResponseCache,
    client: RequestDecorator<T>,
    max_redirects: usize,
}

impl Session<ReqwestTransport> {
    /// Create a plain-HTTP session for `host`
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_config(SessionConfig::new(host))
    }

    /// Create an HTTPS session for `host`. Certificate verification is off.
    pub fn new_https(host: impl Into<String>) -> Result<Self> {
        Self::with_config(SessionConfig::https(host))
    }

    /// Create a session from a config, building a reqwest transport for it
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        let transport = ReqwestTransport::with_config(config.transport_config())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Rebuild a session from a [`store`](Session::store) blob
    pub fn restore(blob: &str) -> Result<Self> {
        let snapshot = SessionSnapshot::decode(blob)?;
        let config = if snapshot.https {
            SessionConfig::https(snapshot.host.clone())
        } else {
            SessionConfig::new(snapshot.host.clone())
        };
        let transport = ReqwestTransport::with_config(config.transport_config())?;
        Ok(Self::from_snapshot(snapshot, transport))
    }
}

impl<T: Transport> Session<T> {
    /// Create a session over any transport
    pub fn with_transport(config: SessionConfig, transport: T) -> Self {
        let max_redirects = config.transport_config().max_redirects;
        let mut state = SessionState::new(config.host, config.https);
        state.resolver.auto_host = config.auto_host;
        if let Some(agent) = config.user_agent {
            state.headers.set_agent(agent);
        }
        for (name, value) in config.headers {
            state.headers.set(name, value);
        }

        Self {
            state,
            cache: ResponseCache::new(config.cache_ttl_secs),
            client: RequestDecorator::new(transport),
            max_redirects,
        }
    }

    /// Rebuild a session from a [`store`](Session::store) blob over a given
    /// transport
    pub fn restore_with_transport(blob: &str, transport: T) -> Result<Self> {
        Ok(Self::from_snapshot(SessionSnapshot::decode(blob)?, transport))
    }

    fn from_snapshot(snapshot: SessionSnapshot, transport: T) -> Self {
        let mut state = SessionState::new(snapshot.host, snapshot.https);
        state.resolver.auto_host = snapshot.auto_host;
        state.referer = snapshot.referer;
        state.cookies = snapshot.cookies;
        state.headers = snapshot.header;

        Self {
            state,
            cache: ResponseCache::new(snapshot.cache_ttl_secs),
            client: RequestDecorator::new(transport),
            max_redirects: TransportConfig::default().max_redirects,
        }
    }

    /// Serialize host, scheme, referer, cache TTL, host learning, cookies and
    /// headers. Cached responses are not included.
    pub fn store(&self) -> Result<String> {
        self.snapshot().encode()
    }

    /// Portable state of this session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            https: self.state.resolver.https,
            host: self.state.resolver.host.clone(),
            referer: self.state.referer.clone(),
            cache_ttl_secs: self.cache.ttl_secs(),
            auto_host: self.state.resolver.auto_host,
            cookies: self.state.cookies.clone(),
            header: self.state.headers.clone(),
        }
    }

    /// GET `path`, serving a fresh cached response when there is one
    pub async fn get(&mut self, path: &str) -> Result<Response> {
        let url = self.state.resolver.resolve(path);
        let request = Request::get(&url)?;

        let key = CacheKey::get(&url);
        if let Some(entry) = self.cache.lookup(&key) {
            return Ok(entry.response.clone());
        }

        let response = self.send(request).await?;
        self.cache_response(key, &response);
        Ok(response)
    }

    /// GET `path` from the network even if a fresh cached response exists.
    /// The result still refreshes the cache.
    pub async fn get_no_cache(&mut self, path: &str) -> Result<Response> {
        let url = self.state.resolver.resolve(path);
        let request = Request::get(&url)?;

        let response = self.send(request).await?;
        self.cache_response(CacheKey::get(&url), &response);
        Ok(response)
    }

    /// POST a raw body. Never cached; the resolved URL becomes the referer.
    pub async fn post(
        &mut self,
        path: &str,
        content_type: &str,
        body: impl Into<Bytes>,
    ) -> Result<Response> {
        let url = self.state.resolver.resolve(path);
        let request = Request::post(&url)?
            .header(headers::CONTENT_TYPE, content_type)?
            .body(body);

        let response = self.send(request).await?;
        self.state.referer = url;
        Ok(response)
    }

    /// POST a url-encoded form; `None` posts an empty form
    pub async fn post_form(&mut self, path: &str, form: Option<&FormValues>) -> Result<Response> {
        let body = form.map(FormValues::encode).unwrap_or_default();
        self.post(path, FORM_CONTENT_TYPE, body).await
    }

    /// [`post_form`](Self::post_form) up to `attempts` times, stopping at the
    /// first attempt without a transport error. Returns the last attempt's
    /// result. Zero attempts is rejected without sending.
    pub async fn post_form_retry(
        &mut self,
        path: &str,
        form: Option<&FormValues>,
        attempts: usize,
    ) -> Result<Response> {
        if attempts == 0 {
            return Err(Error::invalid_request("attempts must be greater than zero"));
        }
        let mut attempt = 1;
        loop {
            match self.post_form(path, form).await {
                Err(e) if e.is_transport() && attempt < attempts => {
                    tracing::warn!(path, attempt, attempts, error = %e, "Form post failed, retrying");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// [`post_form`](Self::post_form) and decode the JSON body into `D`
    pub async fn call_post_form<D: DeserializeOwned>(
        &mut self,
        path: &str,
        form: Option<&FormValues>,
    ) -> Result<D> {
        self.post_form(path, form).await?.json()
    }

    /// GET `path` and write the body to `destination`, replacing its content
    pub async fn save_file(&mut self, path: &str, destination: impl AsRef<Path>) -> Result<()> {
        let response = self.get(path).await?;
        tokio::fs::write(destination.as_ref(), &response.body).await?;
        tracing::debug!(
            path,
            destination = %destination.as_ref().display(),
            bytes = response.body.len(),
            "Saved response body"
        );
        Ok(())
    }

    /// GET `path` and return the body as standard base64. Non-2xx responses
    /// are errors.
    pub async fn get_base64(&mut self, path: &str) -> Result<String> {
        let response = self.get(path).await?;
        if !response.is_success() {
            return Err(Error::unexpected_status(response.status, response.url.as_str()));
        }
        Ok(STANDARD.encode(&response.body))
    }

    /// Drop the cached GET response for `path`
    pub fn remove_get_cache(&mut self, path: &str) {
        let key = CacheKey::get(&self.state.resolver.peek(path));
        self.cache.invalidate(&key);
    }

    /// Drop a cached form POST response for `path` and `form`
    pub fn remove_post_cache(&mut self, path: &str, form: Option<&FormValues>) {
        self.cache.invalidate(&CacheKey::post(path, form));
    }

    /// Current host
    pub fn host(&self) -> &str {
        &self.state.resolver.host
    }

    /// Replace the host
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.state.resolver.host = host.into();
    }

    /// Check if relative paths resolve with `https://`
    pub fn is_https(&self) -> bool {
        self.state.resolver.https
    }

    /// Check if absolute URLs replace the host
    pub fn auto_host(&self) -> bool {
        self.state.resolver.auto_host
    }

    /// Enable/disable host learning
    pub fn set_auto_host(&mut self, enabled: bool) {
        self.state.resolver.auto_host = enabled;
    }

    /// Last visited URL, empty before the first round trip
    pub fn referer(&self) -> &str {
        &self.state.referer
    }

    /// Replace the referer sent with the next request
    pub fn set_referer(&mut self, referer: impl Into<String>) {
        self.state.referer = referer.into();
    }

    /// Session cookies
    pub fn cookies(&self) -> &CookieJar {
        &self.state.cookies
    }

    /// Session cookies, mutable
    pub fn cookies_mut(&mut self) -> &mut CookieJar {
        &mut self.state.cookies
    }

    /// Register a custom header sent with every request
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.state.headers.set(name, value);
    }

    /// Override the user agent
    pub fn set_user_agent(&mut self, agent: impl Into<String>) {
        self.state.headers.set_agent(agent);
    }

    /// Cache TTL in seconds
    pub fn cache_ttl_secs(&self) -> i64 {
        self.cache.ttl_secs()
    }

    /// Change the cache TTL; 0 disables caching
    pub fn set_cache_ttl_secs(&mut self, ttl_secs: i64) {
        self.cache.set_ttl_secs(ttl_secs);
    }

    /// Response cache
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Response cache, mutable
    pub fn cache_mut(&mut self) -> &mut ResponseCache {
        &mut self.cache
    }

    /// Redirects followed per request before giving up
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Change the redirect limit
    pub fn set_max_redirects(&mut self, max: usize) {
        self.max_redirects = max;
    }

    /// Wrapped transport
    pub fn transport(&self) -> &T {
        self.client.inner()
    }

    async fn send(&mut self, mut request: Request) -> Result<Response> {
        let mut redirects = 0;
        loop {
            tracing::debug!(method = %request.method, url = %request.url, "Sending request");
            let response = self.client.send(&mut self.state, request.clone()).await?;

            let next = match redirect_request(&request, &response)? {
                Some(next) => next,
                None => return Ok(response),
            };
            if redirects >= self.max_redirects {
                return Err(Error::TooManyRedirects {
                    max: self.max_redirects,
                    url: next.url_str().to_string(),
                });
            }
            redirects += 1;

            tracing::debug!(
                status = response.status_code(),
                from = %request.url,
                to = %next.url,
                "Following redirect"
            );
            request = next;
        }
    }

    fn cache_response(&mut self, key: CacheKey, response: &Response) {
        if self.cache.is_enabled() {
            self.cache.store(key, response.clone());
        }
    }
}

/// Next hop for a redirect response; `None` when `response` is final.
///
/// 307 and 308 repeat the request as is. 301, 302 and 303 switch to a
/// bodiless GET (HEAD stays HEAD). A redirect without `Location` is final.
fn redirect_request(request: &Request, response: &Response) -> Result<Option<Request>> {
    let status = response.status_code();
    if !matches!(status, 301 | 302 | 303 | 307 | 308) {
        return Ok(None);
    }
    let location = match response.header(headers::LOCATION) {
        Some(location) => location,
        None => return Ok(None),
    };
    let target = request.url.join(location)?;

    if matches!(status, 307 | 308) {
        let mut next = Request::new(request.method.clone(), target.as_str())?;
        next.headers = request.headers.clone();
        next.body = request.body.clone();
        return Ok(Some(next));
    }

    let method = if request.method == Method::HEAD {
        Method::HEAD
    } else {
        Method::GET
    };
    Ok(Some(Request::new(method, target.as_str())?))
}
