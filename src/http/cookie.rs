// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session-wide cookie jar
//!
//! Cookies are tracked as one flat, ordered set keyed by name. Domain and
//! path attributes are kept as the server sent them but never used to pick
//! which cookies go out: every held cookie is attached to every request.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderValue, COOKIE};
use serde::{Deserialize, Serialize};

use super::request::Request;

/// A single HTTP cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain attribute (empty when the server sent none)
    #[serde(default)]
    pub domain: String,
    /// Path attribute (empty when the server sent none)
    #[serde(default)]
    pub path: String,
    /// Expiration time (None = session cookie)
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    /// Raw Max-Age attribute
    #[serde(default)]
    pub max_age: Option<i64>,
    /// Secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,
    /// HttpOnly flag (not accessible via JavaScript)
    #[serde(default)]
    pub http_only: bool,
    /// SameSite attribute
    #[serde(default)]
    pub same_site: SameSite,
}

/// SameSite cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SameSite {
    /// Attribute absent or `None`
    #[default]
    None,
    /// Cookie sent with same-site and top-level navigations
    Lax,
    /// Cookie only sent with same-site requests
    Strict,
}

impl Cookie {
    /// Create a new cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: String::new(),
            path: String::new(),
            expires: None,
            max_age: None,
            secure: false,
            http_only: false,
            same_site: SameSite::default(),
        }
    }

    /// Set the domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set expiration time
    pub fn expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Parse a Set-Cookie header value
    pub fn parse(header: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let first = parts.next()?.trim();

        let (name, value) = first.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let mut cookie = Cookie::new(name, value.trim().trim_matches('"'));

        for part in parts {
            let part = part.trim();
            if let Some((attr, val)) = part.split_once('=') {
                let attr = attr.trim().to_lowercase();
                let val = val.trim();
                match attr.as_str() {
                    "domain" => cookie.domain = val.trim_start_matches('.').to_string(),
                    "path" => cookie.path = val.to_string(),
                    "expires" => {
                        if let Ok(dt) = DateTime::parse_from_rfc2822(val) {
                            cookie.expires = Some(dt.with_timezone(&Utc));
                        }
                    }
                    "max-age" => {
                        if let Ok(secs) = val.parse::<i64>() {
                            cookie.max_age = Some(secs);
                            cookie.expires = chrono::Duration::try_seconds(secs)
                                .and_then(|d| Utc::now().checked_add_signed(d));
                        }
                    }
                    "samesite" => {
                        cookie.same_site = match val.to_lowercase().as_str() {
                            "strict" => SameSite::Strict,
                            "lax" => SameSite::Lax,
                            _ => SameSite::None,
                        };
                    }
                    _ => {}
                }
            } else {
                match part.to_lowercase().as_str() {
                    "secure" => cookie.secure = true,
                    "httponly" => cookie.http_only = true,
                    _ => {}
                }
            }
        }

        Some(cookie)
    }

    /// Convert to cookie header format
    pub fn to_header_value(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Ordered cookie storage, at most one cookie per name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    /// Create a new empty cookie jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every held cookie to the request's `Cookie` header, in jar
    /// order. Cookies already on the request are kept in front.
    pub fn attach(&self, request: &mut Request) {
        if self.cookies.is_empty() {
            return;
        }

        let mut parts: Vec<String> = Vec::with_capacity(self.cookies.len() + 1);
        if let Some(existing) = request.header_value(COOKIE.as_str()) {
            if !existing.is_empty() {
                parts.push(existing.to_string());
            }
        }
        parts.extend(self.cookies.iter().map(Cookie::to_header_value));

        match HeaderValue::try_from(parts.join("; ")) {
            Ok(value) => {
                request.headers.insert(COOKIE, value);
            }
            Err(e) => tracing::warn!("Dropping unencodable cookie header: {}", e),
        }
    }

    /// Merge cookies from a response. A cookie whose name is already held
    /// replaces the old one in place; new names are appended in the order
    /// given.
    pub fn merge<I>(&mut self, cookies: I)
    where
        I: IntoIterator<Item = Cookie>,
    {
        for cookie in cookies {
            match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
                Some(existing) => {
                    tracing::trace!(name = %cookie.name, "Replacing cookie");
                    *existing = cookie;
                }
                None => {
                    tracing::trace!(name = %cookie.name, "Adding cookie");
                    self.cookies.push(cookie);
                }
            }
        }
    }

    /// Add or replace a single cookie
    pub fn set(&mut self, cookie: Cookie) {
        self.merge(std::iter::once(cookie));
    }

    /// Get a cookie by name
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name == name)
    }

    /// Get a cookie value by name
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.value.as_str())
    }

    /// Remove a cookie by name
    pub fn remove(&mut self, name: &str) -> Option<Cookie> {
        let idx = self.cookies.iter().position(|c| c.name == name)?;
        Some(self.cookies.remove(idx))
    }

    /// Iterate cookies in jar order
    pub fn iter(&self) -> std::slice::Iter<'_, Cookie> {
        self.cookies.iter()
    }

    /// Clear all cookies
    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Get total cookie count
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Check if jar is empty
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl FromIterator<Cookie> for CookieJar {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        let mut jar = CookieJar::new();
        jar.merge(iter);
        jar
    }
}

impl<'a> IntoIterator for &'a CookieJar {
    type Item = &'a Cookie;
    type IntoIter = std::slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}
