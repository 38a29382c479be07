// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Portable session state
//!
//! A snapshot is JSON wrapped in standard base64 so it can travel as plain
//! text. It never carries cached responses or transport state.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::headers::HeaderPolicy;
use crate::error::Result;
use crate::http::CookieJar;

/// Serializable subset of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Relative paths resolve with `https://`
    #[serde(default)]
    pub https: bool,
    /// Host (with optional `:port`)
    #[serde(default)]
    pub host: String,
    /// Last visited URL
    #[serde(default)]
    pub referer: String,
    /// Response cache TTL in seconds
    #[serde(default)]
    pub cache_ttl_secs: i64,
    /// Absolute URLs replace the host
    #[serde(default)]
    pub auto_host: bool,
    /// Session cookies in jar order
    #[serde(default)]
    pub cookies: CookieJar,
    /// User agent override and custom headers
    #[serde(default)]
    pub header: HeaderPolicy,
}

impl SessionSnapshot {
    /// Encode as base64 JSON
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decode from base64 JSON
    pub fn decode(blob: &str) -> Result<Self> {
        let json = STANDARD.decode(blob.trim())?;
        Ok(serde_json::from_slice(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::Cookie;

    #[test]
    fn test_snapshot_round_trip() {
        let mut snapshot = SessionSnapshot {
            https: true,
            host: "example.com".to_string(),
            referer: "https://example.com/login".to_string(),
            cache_ttl_secs: 30,
            auto_host: true,
            ..Default::default()
        };
        snapshot.cookies.set(Cookie::new("sid", "abc").path("/"));
        snapshot.header.set("X-Token", "t");

        let blob = snapshot.encode().unwrap();
        assert!(!blob.contains('{'));
        assert_eq!(SessionSnapshot::decode(&blob).unwrap(), snapshot);
    }

    #[test]
    fn test_missing_fields_default() {
        let blob = STANDARD.encode(r#"{"host":"example.com"}"#);
        let snapshot = SessionSnapshot::decode(&blob).unwrap();
        assert_eq!(snapshot.host, "example.com");
        assert!(snapshot.cookies.is_empty());
        assert_eq!(snapshot.cache_ttl_secs, 0);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(SessionSnapshot::decode("%%%"), Err(Error::Base64(_))));

        let not_json = STANDARD.encode("nope");
        assert!(matches!(
            SessionSnapshot::decode(&not_json),
            Err(Error::Serialization(_))
        ));
    }
}
