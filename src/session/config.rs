// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session configuration

use std::time::Duration;

use crate::http::TransportConfig;

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Host (with optional `:port`) relative paths resolve against
    pub host: String,
    /// Resolve relative paths with `https://`
    pub https: bool,
    /// Let absolute request URLs replace `host`
    pub auto_host: bool,
    /// Response cache TTL in seconds; 0 disables caching
    pub cache_ttl_secs: i64,
    /// User agent override
    pub user_agent: Option<String>,
    /// Custom headers applied after the defaults
    pub headers: Vec<(String, String)>,
    /// Transport settings; None picks the default for the scheme
    pub transport: Option<TransportConfig>,
}

impl SessionConfig {
    /// Create a config for a plain-HTTP host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Create a config for an HTTPS host
    pub fn https(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            https: true,
            ..Default::default()
        }
    }

    /// Enable/disable host learning from absolute URLs
    pub fn auto_host(mut self, enabled: bool) -> Self {
        self.auto_host = enabled;
        self
    }

    /// Set the cache TTL
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set transport config
    pub fn transport(mut self, transport: TransportConfig) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Transport config to build with. HTTPS sessions skip certificate
    /// verification unless a transport config was given explicitly.
    pub fn transport_config(&self) -> TransportConfig {
        match (&self.transport, self.https) {
            (Some(config), _) => config.clone(),
            (None, true) => TransportConfig::insecure(),
            (None, false) => TransportConfig::default(),
        }
    }
}
