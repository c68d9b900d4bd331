//! Application Configuration
//!
//! Everything the run needs, read from the environment after `.env` has been
//! loaded.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rate_report::ReportConfig;
use rate_report::svckit::DEFAULT_OUTPUT_DIR;
use spot_client::ClientConfig;

/// Process configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Exchange client settings (`BASE_URL`, `API_KEY`, `*_TIMEOUT_SECS`)
    pub client: ClientConfig,

    /// Log verbosity (`LOG_LEVEL`), any `EnvFilter` directive
    pub log_level: String,

    /// Tickers to price (`CRYPTOCURRENCIES_LIST`, a JSON array)
    pub symbols: Vec<String>,

    /// Report directory (`OUTPUT_DIR`)
    pub output_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = ClientConfig::from_lookup(&lookup)?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "INFO".into());

        let symbols = match lookup("CRYPTOCURRENCIES_LIST") {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).with_context(|| {
                format!("CRYPTOCURRENCIES_LIST must be a JSON array of strings, got {raw:?}")
            })?,
            None => Vec::new(),
        };

        let output_dir = lookup("OUTPUT_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

        Ok(Self {
            client,
            log_level,
            symbols,
            output_dir,
        })
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            output_dir: self.output_dir.clone(),
        }
    }
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
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.client.base_url, "https://api.binance.com");
        assert_eq!(config.client.api_key, "");
        assert_eq!(config.log_level, "INFO");
        assert!(config.symbols.is_empty());
        assert_eq!(config.output_dir, PathBuf::from("./output"));
    }

    #[test]
    fn test_symbol_list_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CRYPTOCURRENCIES_LIST", r#"["ETH", "DOGE", "LTC"]"#),
            ("LOG_LEVEL", "DEBUG"),
            ("OUTPUT_DIR", "/tmp/rates"),
        ]))
        .unwrap();

        assert_eq!(config.symbols, vec!["ETH", "DOGE", "LTC"]);
        assert_eq!(config.log_level, "DEBUG");
        assert_eq!(config.report_config().output_dir, PathBuf::from("/tmp/rates"));
    }

    #[test]
    fn test_malformed_symbol_list_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("CRYPTOCURRENCIES_LIST", "ETH,DOGE")]));
        assert!(result.is_err());
    }
}
