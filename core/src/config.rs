//! Gateway configuration.
//!
//! Read from the environment by `GatewayConfig::from_env`; every variable is
//! optional and falls back to the local development server.

use std::time::Duration;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "PRODUCT_API_URL";
pub const TIMEOUT_VAR: &str = "PRODUCT_API_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API root; the gateway appends `/api/products`.
    pub api_url: String,
    /// Per-request timeout handed to the bundled transports.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(api_url) = lookup(API_URL_VAR) {
            config.api_url = api_url;
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                var: TIMEOUT_VAR,
                value: value.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
