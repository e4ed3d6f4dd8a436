//! HTTP configuration types.
//!
//! This module defines `HttpConfig` and its builder, used to configure the
//! default transport. Configuration is explicit and passed at construction
//! time; there is no shared global session state.

use std::collections::HashMap;
use std::time::Duration;

/// Fixed default request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP configuration for the default transport.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout (full request/response cycle).
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// Headers applied to every request sent through the transport.
    pub headers: HashMap<String, String>,
    /// User agent.
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            headers: HashMap::new(),
            user_agent: None,
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }
}

/// Builder for `HttpConfig`.
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    headers: HashMap<String, String>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HttpConfig {
        HttpConfig {
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout,
            headers: self.headers,
            user_agent: self.user_agent,
        }
    }
}
