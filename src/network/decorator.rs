// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request pipeline decorator
//!
//! Wraps a [`Transport`] so every round trip passes through a before-hook and,
//! when the transport succeeds, an after-hook. The hooks own all side effects;
//! the decorator itself only holds the wrapped transport.

use crate::error::Result;
use crate::http::{Request, Response, Transport};

/// Hooks run around every decorated round trip.
///
/// Implemented by the state that the hooks mutate and handed to
/// [`RequestDecorator::send`] explicitly, so each mutation site is visible
/// at the call.
pub trait RequestHooks {
    /// Called before the request is transmitted
    fn before_send(&mut self, request: &mut Request);

    /// Called after a successful round trip, before the caller sees the
    /// response. Never called when the transport fails.
    fn after_send(&mut self, response: &Response, request: &Request);
}

/// Transport wrapper running [`RequestHooks`] around each send
#[derive(Debug, Clone)]
pub struct RequestDecorator<T> {
    inner: T,
}

impl<T: Transport> RequestDecorator<T> {
    /// Wrap a transport
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Get the wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Send a request through the hooks
    pub async fn send<H>(&self, hooks: &mut H, mut request: Request) -> Result<Response>
    where
        H: RequestHooks + ?Sized,
    {
        hooks.before_send(&mut request);

        // The transport consumes the request; keep what the after-hook needs.
        let sent = request.clone();
        let response = match self.inner.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url = %sent.url, error = %e, "Send failed, skipping after-hook");
                return Err(e);
            }
        };

        hooks.after_send(&response, &sent);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use bytes::Bytes;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    struct Echo {
        fail: bool,
    }

    #[async_trait]
    impl Transport for Echo {
        async fn send(&self, request: Request) -> Result<Response> {
            if self.fail {
                return Err(Error::network("connection refused"));
            }
            let seen = request.header_value("x-hook").unwrap_or("").to_string();
            Ok(Response::new(
                StatusCode::OK,
                HeaderMap::new(),
                Bytes::from(seen),
                request.url,
            ))
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl RequestHooks for Recorder {
        fn before_send(&mut self, request: &mut Request) {
            self.events.push("before".to_string());
            request.set_header("x-hook", "set").unwrap();
        }

        fn after_send(&mut self, response: &Response, request: &Request) {
            self.events
                .push(format!("after {} {}", response.status_code(), request.url_str()));
        }
    }

    #[tokio::test]
    async fn test_hooks_wrap_successful_send() {
        let decorator = RequestDecorator::new(Echo { fail: false });
        let mut hooks = Recorder::default();

        let resp = decorator
            .send(&mut hooks, Request::get("http://example.com/a").unwrap())
            .await
            .unwrap();

        assert_eq!(resp.text().unwrap(), "set");
        assert_eq!(
            hooks.events,
            vec!["before".to_string(), "after 200 http://example.com/a".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_send_skips_after_hook() {
        let decorator = RequestDecorator::new(Echo { fail: true });
        let mut hooks = Recorder::default();

        let result = decorator
            .send(&mut hooks, Request::get("http://example.com/a").unwrap())
            .await;

        assert!(result.unwrap_err().is_transport());
        assert_eq!(hooks.events, vec!["before".to_string()]);
    }
}
