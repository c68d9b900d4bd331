//! Client Configuration

use std::time::Duration;

use crate::error::{Result, SpotError};

/// Default API origin
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Spot client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API origin, without a trailing slash
    pub base_url: String,

    /// API key sent in `X-MBX-APIKEY` (may be empty for public endpoints)
    pub api_key: String,

    /// Timeout applied to every request
    pub timeout: Duration,

    /// Timeout for establishing the TCP/TLS connection
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connect timeout
    #[must_use]
    pub const fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Connect timeout actually handed to the HTTP client
    ///
    /// Must stay below the request timeout, otherwise a connect that never
    /// completes surfaces as a request timeout instead of a connect failure.
    pub fn effective_connect_timeout(&self) -> Duration {
        self.connect_timeout.min(self.timeout / 2)
    }

    /// Create from a key lookup (process environment, `.env` map, tests)
    ///
    /// Reads `BASE_URL`, `API_KEY`, `REQUEST_TIMEOUT_SECS` and
    /// `CONNECT_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let api_key = lookup("API_KEY").unwrap_or_default();

        let timeout = secs_from(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let connect_timeout =
            secs_from(&lookup, "CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;

        Ok(Self::new(base_url, api_key)
            .with_timeout(timeout)
            .with_connect_timeout(connect_timeout))
    }
}

fn secs_from<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(key) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            SpotError::Config(format!("{key} must be a whole number, got {raw:?}"))
        })?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, "https://api.binance.com");
        assert_eq!(config.api_key, "");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("BASE_URL", "https://testnet.binance.vision/"),
            ("API_KEY", "abc123"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("CONNECT_TIMEOUT_SECS", "1"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://testnet.binance.vision");
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(SpotError::Config(_))));
    }

    #[test]
    fn test_connect_timeout_stays_below_request_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.effective_connect_timeout(), Duration::from_secs(5));

        let tight = ClientConfig::default()
            .with_timeout(Duration::from_secs(2))
            .with_connect_timeout(Duration::from_secs(2));
        assert_eq!(tight.effective_connect_timeout(), Duration::from_secs(1));
        assert!(tight.effective_connect_timeout() < tight.timeout);
    }
}
