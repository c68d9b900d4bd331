//! exchange-rates
//!
//! Prices the configured tickers against BTC and writes
//! `./output/exchange_rates_<YYYYMMDD-HHMMSS>.csv`. Meant to be run by hand
//! or from cron; exits non-zero if the exchange is unreachable or the report
//! cannot be written.

mod config;

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rate_report::PriceReportingService;
use spot_client::SpotClient;

use crate::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_new(config.log_level.to_lowercase())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Client and service
    let client = SpotClient::new(config.client.clone())?;
    let service = PriceReportingService::with_config(Arc::new(client), config.report_config());

    service.check_connectivity().await?;
    tracing::info!("✓ Connected to {}", config.client.base_url);

    if config.symbols.is_empty() {
        tracing::warn!("⚠ CRYPTOCURRENCIES_LIST is empty - report will only have a header");
    }

    let prices = service.get_prices(config.symbols.as_slice()).await?;
    let path = service.write_to_csv(&prices)?;

    let failed = prices.iter().filter(|p| p.is_error()).count();
    tracing::info!(
        "Report written to {} ({} tickers, {} failed)",
        path.display(),
        prices.len(),
        failed
    );

    Ok(())
}
