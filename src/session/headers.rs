// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Default and caller-supplied request headers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http::{headers, Request, DEFAULT_USER_AGENT};

/// Accept header sent with every request
pub const DEFAULT_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";
/// Accept-Language header sent with every request
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.8";
/// Accept-Encoding header sent with every request: no compression
pub const DEFAULT_ACCEPT_ENCODING: &str = "none";

/// Header set applied to every outgoing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPolicy {
    /// User agent override; empty means [`DEFAULT_USER_AGENT`]
    #[serde(default)]
    pub agent: String,
    /// Custom headers, applied after the fixed set
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl HeaderPolicy {
    /// Create a policy with the default agent and no custom headers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom header, replacing an earlier value for `name`
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom.insert(name.into(), value.into());
    }

    /// Remove a custom header
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.custom.remove(name)
    }

    /// Override the user agent
    pub fn set_agent(&mut self, agent: impl Into<String>) {
        self.agent = agent.into();
    }

    /// Effective user agent
    pub fn user_agent(&self) -> &str {
        if self.agent.is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &self.agent
        }
    }

    /// Set the fixed headers on `request`, then every custom header on top.
    /// Invalid custom headers are skipped.
    pub fn apply(&self, request: &mut Request, origin: &str) {
        let fixed = [
            (headers::ACCEPT, DEFAULT_ACCEPT),
            (headers::ORIGIN, origin),
            (headers::X_REQUESTED_WITH, "XMLHttpRequest"),
            (headers::USER_AGENT, self.user_agent()),
            (headers::ACCEPT_ENCODING, DEFAULT_ACCEPT_ENCODING),
            (headers::ACCEPT_LANGUAGE, DEFAULT_ACCEPT_LANGUAGE),
        ];
        for (name, value) in fixed {
            if let Err(e) = request.set_header(name, value) {
                tracing::warn!("Skipping default header: {}", e);
            }
        }

        for (name, value) in &self.custom {
            if let Err(e) = request.set_header(name, value) {
                tracing::warn!("Skipping custom header: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(policy: &HeaderPolicy) -> Request {
        let mut req = Request::get("http://example.com/").unwrap();
        policy.apply(&mut req, "http://example.com");
        req
    }

    #[test]
    fn test_fixed_headers() {
        let req = applied(&HeaderPolicy::new());

        assert_eq!(req.header_value("accept"), Some(DEFAULT_ACCEPT));
        assert_eq!(req.header_value("origin"), Some("http://example.com"));
        assert_eq!(req.header_value("x-requested-with"), Some("XMLHttpRequest"));
        assert_eq!(req.header_value("user-agent"), Some(DEFAULT_USER_AGENT));
        assert_eq!(req.header_value("accept-encoding"), Some("none"));
        assert_eq!(req.header_value("accept-language"), Some("en-US,en;q=0.8"));
    }

    #[test]
    fn test_agent_override() {
        let mut policy = HeaderPolicy::new();
        policy.set_agent("fetcher-test/1.0");
        assert_eq!(applied(&policy).header_value("user-agent"), Some("fetcher-test/1.0"));
    }

    #[test]
    fn test_custom_headers_win() {
        let mut policy = HeaderPolicy::new();
        policy.set("Accept", "text/html");
        policy.set("X-Token", "abc");
        policy.set("User-Agent", "custom-wins");
        policy.set_agent("agent-loses");

        let req = applied(&policy);
        assert_eq!(req.header_value("accept"), Some("text/html"));
        assert_eq!(req.header_value("x-token"), Some("abc"));
        assert_eq!(req.header_value("user-agent"), Some("custom-wins"));
        assert_eq!(req.headers.get_all("accept").iter().count(), 1);
    }

    #[test]
    fn test_invalid_custom_header_skipped() {
        let mut policy = HeaderPolicy::new();
        policy.set("bad name", "v");
        policy.set("X-Ok", "yes");

        let req = applied(&policy);
        assert_eq!(req.header_value("x-ok"), Some("yes"));
        assert_eq!(req.header_value("accept"), Some(DEFAULT_ACCEPT));
    }
}
