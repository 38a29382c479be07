// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Path to absolute URL resolution

use serde::{Deserialize, Serialize};
use url::Url;

/// Resolves session-relative paths against a scheme and host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResolver {
    /// Use `https://` for relative paths
    pub https: bool,
    /// Host (with optional `:port`) relative paths are joined to
    pub host: String,
    /// Learn `host` from absolute URLs passed to [`resolve`](Self::resolve)
    pub auto_host: bool,
}

impl UrlResolver {
    /// Create a resolver for a host
    pub fn new(host: impl Into<String>, https: bool) -> Self {
        Self {
            https,
            host: host.into(),
            auto_host: false,
        }
    }

    /// Scheme used for relative paths
    pub fn scheme(&self) -> &'static str {
        if self.https {
            "https"
        } else {
            "http"
        }
    }

    /// Resolve `path` to an absolute URL.
    ///
    /// Anything containing `://` past its first byte is already absolute and
    /// comes back unchanged; with `auto_host` set its host replaces ours.
    pub fn resolve(&mut self, path: &str) -> String {
        if is_absolute(path) {
            if self.auto_host {
                self.learn_host(path);
            }
            return path.to_string();
        }
        self.join(path)
    }

    /// Resolve `path` the same way as [`resolve`](Self::resolve) but never
    /// learn a host from it
    pub fn peek(&self, path: &str) -> String {
        if is_absolute(path) {
            path.to_string()
        } else {
            self.join(path)
        }
    }

    /// Join `path` to the current scheme and host
    pub fn join(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme(), self.host, path)
    }

    /// Bare origin (`scheme://host`), sent as the `Origin` header
    pub fn origin(&self) -> String {
        self.join("")
    }

    fn learn_host(&mut self, absolute: &str) {
        let Ok(url) = Url::parse(absolute) else {
            return;
        };
        let Some(host) = url.host_str() else {
            return;
        };
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        if host != self.host {
            tracing::debug!(from = %self.host, to = %host, "Learned host from absolute URL");
            self.host = host;
        }
    }
}

fn is_absolute(path: &str) -> bool {
    matches!(path.find("://"), Some(idx) if idx > 0)
}
