// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Time-bounded response cache
//!
//! Entries live for `ttl_secs` whole seconds after they are stored. Stale
//! entries are not swept; they are dropped by the first lookup that finds
//! them stale. A TTL of zero or less turns the cache off entirely.

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;

use super::form::FormValues;
use crate::http::Response;

/// Identity of a cacheable request
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a GET of an absolute URL
    pub fn get(url: &str) -> Self {
        Self(format!("get-{}", url))
    }

    /// Key for a form POST to a session-relative path
    pub fn post(path: &str, form: Option<&FormValues>) -> Self {
        let encoded = form.map(FormValues::encode).unwrap_or_default();
        Self(format!("post-{}{}", path, encoded))
    }

    /// Key as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cached response entry
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Response as received (status, headers, final URL, body)
    pub response: Response,
    /// When this entry was stored, in Unix seconds
    pub stored_at: i64,
}

impl CacheEntry {
    /// Check if the entry is still fresh at `now` for the given TTL
    pub fn is_fresh(&self, now: i64, ttl_secs: i64) -> bool {
        now - self.stored_at <= ttl_secs
    }
}

/// In-memory response cache keyed by [`CacheKey`]
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    ttl_secs: i64,
    entries: HashMap<CacheKey, CacheEntry>,
}

impl ResponseCache {
    /// Create a cache; `ttl_secs <= 0` disables it
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: HashMap::new(),
        }
    }

    /// Current TTL in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Change the TTL. Existing entries are judged by the new value.
    pub fn set_ttl_secs(&mut self, ttl_secs: i64) {
        self.ttl_secs = ttl_secs;
    }

    /// Check if caching is on
    pub fn is_enabled(&self) -> bool {
        self.ttl_secs > 0
    }

    /// Look up a fresh entry
    pub fn lookup(&mut self, key: &CacheKey) -> Option<&CacheEntry> {
        self.lookup_at(key, now())
    }

    /// Look up a fresh entry as of `now`, dropping it if stale
    pub fn lookup_at(&mut self, key: &CacheKey, now: i64) -> Option<&CacheEntry> {
        if !self.is_enabled() {
            return None;
        }

        let fresh = self.entries.get(key)?.is_fresh(now, self.ttl_secs);
        if !fresh {
            tracing::debug!(key = %key, "Cache entry stale, dropping");
            self.entries.remove(key);
            return None;
        }

        tracing::debug!(key = %key, "Cache hit");
        self.entries.get(key)
    }

    /// Store a response
    pub fn store(&mut self, key: CacheKey, response: Response) {
        self.store_at(key, response, now());
    }

    /// Store a response as of `now`
    pub fn store_at(&mut self, key: CacheKey, response: Response, now: i64) {
        if !self.is_enabled() {
            return;
        }
        tracing::trace!(key = %key, "Caching response");
        self.entries.insert(
            key,
            CacheEntry {
                response,
                stored_at: now,
            },
        );
    }

    /// Remove an entry; absent keys are fine
    pub fn invalidate(&mut self, key: &CacheKey) {
        self.entries.remove(key);
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, fresh or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an entry is stored for `key`, without touching freshness
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }
}

fn now() -> i64 {
    Utc::now().timestamp()
}
