//! Configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
    DEV_BASE_URL, PROD_BASE_URL,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub identity: IdentityConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host, e.g. `https://api.lookcircuit.com`
    pub base_url: String,
    /// Version prefix inserted between the base URL and every endpoint path
    pub api_version: String,
    /// Deadline for a whole request, dispatch through body read
    pub timeout_ms: u64,
    /// Extra attempts after a transport failure or 5xx. Zero disables retries.
    pub max_retries: u32,
    /// Base delay between attempts, doubled on each retry
    pub retry_delay_ms: u64,
}

impl ApiConfig {
    /// Config pointing at `base_url` with every other field defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Request deadline as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base retry backoff as a `Duration`
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Compose the full URL for an endpoint path. No validation is applied.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url.trim_end_matches('/'), self.api_version, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = if cfg!(debug_assertions) { DEV_BASE_URL } else { PROD_BASE_URL };
        Self {
            base_url: base_url.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

/// Identity provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every provider call
    #[serde(skip_serializing)]
    pub anon_key: String,
}
