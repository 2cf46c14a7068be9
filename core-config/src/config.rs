//! API configuration with fail-fast builder validation.

use std::collections::HashSet;
use thiserror::Error;

use crate::endpoints::Endpoint;

/// Default per-request deadline in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base URL is required - call base_url() on the builder")]
    MissingBaseUrl,

    #[error("Invalid base URL '{0}': expected an http(s) origin")]
    InvalidBaseUrl(String),
}

/// Configuration the adapter layer consumes.
///
/// Holds the backend origin, the per-endpoint live/mock switches, and the
/// default request deadline. Injected into `Adapters` explicitly so the
/// pipeline is testable without ambient state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    live: HashSet<Endpoint>,
    default_timeout_ms: u64,
}

impl ApiConfig {
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether this endpoint reads from the live backend (true) or from a
    /// static fixture (false).
    pub fn is_live(&self, endpoint: Endpoint) -> bool {
        self.live.contains(&endpoint)
    }

    pub fn default_timeout_ms(&self) -> u64 {
        self.default_timeout_ms
    }
}

/// Builder for [`ApiConfig`] with fail-fast validation.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    live: HashSet<Endpoint>,
    default_timeout_ms: Option<u64>,
}

impl ApiConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Serve this endpoint from the live backend.
    pub fn live(mut self, endpoint: Endpoint) -> Self {
        self.live.insert(endpoint);
        self
    }

    /// Serve every endpoint from the live backend.
    pub fn all_live(mut self) -> Self {
        self.live.extend(Endpoint::ALL);
        self
    }

    pub fn default_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.default_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(ApiConfig {
            base_url,
            live: self.live,
            default_timeout_ms: self.default_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        })
    }
}
