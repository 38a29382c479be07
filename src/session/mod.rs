// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session API
//!
//! High-level, browser-like session built from the resolver, header policy,
//! cookie jar and response cache.

mod cache;
mod config;
mod form;
mod headers;
mod resolver;
#[allow(clippy::module_inception)]
mod session;
mod snapshot;
mod state;

pub use cache::{CacheEntry, CacheKey, ResponseCache};
pub use config::SessionConfig;
pub use form::FormValues;
pub use headers::{HeaderPolicy, DEFAULT_ACCEPT, DEFAULT_ACCEPT_ENCODING, DEFAULT_ACCEPT_LANGUAGE};
pub use resolver::UrlResolver;
pub use session::Session;
pub use snapshot::SessionSnapshot;
pub use state::SessionState;
