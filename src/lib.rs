// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Fetcher - Browser-like HTTP Session
//!
//! A stateful wrapper over an HTTP transport for login flows, scraping and
//! light API polling.
//!
//! ## Features
//!
//! - Cookie tracking: one flat session-wide jar, last write wins per name
//! - Rolling referer: every request carries the previous URL
//! - Default headers: XHR-style defaults plus per-session overrides
//! - Response cache: optional TTL cache for GET requests
//! - Portable state: store a session as a base64 blob and restore it later
//!
//! ## Example
//!
//! ```rust,no_run
//! use fetcher::{FormValues, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::new("example.com")?;
//!     session.set_cache_ttl_secs(60);
//!
//!     session.get("/").await?;
//!
//!     let mut form = FormValues::new();
//!     form.add("user", "alice").add("pass", "secret");
//!     let reply: serde_json::Value = session.call_post_form("/login", Some(&form)).await?;
//!     println!("login: {}", reply);
//!
//!     let blob = session.store()?;
//!     let _resumed = Session::restore(&blob)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod network;
pub mod session;

// Re-exports for convenience

// Session
pub use session::{
    CacheEntry, CacheKey, FormValues, HeaderPolicy, ResponseCache, Session, SessionConfig,
    SessionSnapshot, SessionState, UrlResolver,
};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{
    Cookie, CookieJar, ReqwestTransport, Request, Response, SameSite, Transport, TransportConfig,
    DEFAULT_USER_AGENT,
};

// Network
pub use network::{RequestDecorator, RequestHooks};

/// Fetcher version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
