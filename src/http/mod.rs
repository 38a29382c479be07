// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the fetcher session
//!
//! Request/response types, the session-wide cookie jar and the transport
//! capability the session sends through.

mod client;
mod cookie;
mod request;
mod response;

pub use client::{ReqwestTransport, Transport, TransportConfig};
pub use cookie::{Cookie, CookieJar, SameSite};
pub use request::Request;
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_8_3) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/27.0.1453.116 Safari/537.36";

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const ACCEPT_ENCODING: &str = "accept-encoding";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const LOCATION: &str = "location";
    pub const COOKIE: &str = "cookie";
    pub const SET_COOKIE: &str = "set-cookie";
    pub const USER_AGENT: &str = "user-agent";
    pub const REFERER: &str = "referer";
    pub const ORIGIN: &str = "origin";
    pub const X_REQUESTED_WITH: &str = "x-requested-with";
}

/// Content type used by form posts
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
