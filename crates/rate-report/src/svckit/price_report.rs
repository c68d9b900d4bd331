//! Price Reporting Service
//!
//! Checks the exchange is reachable, prices every ticker against BTC one at
//! a time, and writes the sorted result to a CSV file.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use rust_decimal::Decimal;
use spot_client::{SpotApi, SpotError};

use super::csv_report::{report_file_name, sort_by_price, write_report};
use crate::error::{ReportError, Result};
use crate::model::PriceRecord;

/// Default directory reports are written to
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Reporting configuration
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Directory for `exchange_rates_*.csv` files (created on demand)
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Service for getting prices and writing the report
pub struct PriceReportingService {
    exchange: Arc<dyn SpotApi>,
    config: ReportConfig,
}

impl PriceReportingService {
    pub fn new(exchange: Arc<dyn SpotApi>) -> Self {
        Self::with_config(exchange, ReportConfig::default())
    }

    pub fn with_config(exchange: Arc<dyn SpotApi>, config: ReportConfig) -> Self {
        Self { exchange, config }
    }

    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Ping the exchange
    ///
    /// Only a refused/failed connection becomes `ReportError::Connectivity`;
    /// an HTTP error answer to the ping is passed through as-is.
    pub async fn check_connectivity(&self) -> Result<()> {
        match self.exchange.ping().await {
            Ok(_) => Ok(()),
            Err(SpotError::Connection { .. }) => Err(ReportError::Connectivity {
                base_url: self.exchange.base_url().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Price each ticker against BTC, in input order
    ///
    /// A client error (4xx) is recorded on that ticker's row and the batch
    /// continues. Any other failure aborts the whole batch.
    pub async fn get_prices<S: AsRef<str>>(&self, tickers: &[S]) -> Result<Vec<PriceRecord>> {
        let names: Vec<&str> = tickers.iter().map(AsRef::as_ref).collect();
        tracing::info!("getting prices for: {:?}", names);

        let mut result = Vec::with_capacity(names.len());
        for ticker in names {
            let mut record = PriceRecord::new(ticker);

            match self.exchange.ticker_price(&record.pair()).await {
                Ok(ticker_price) => {
                    let price = parse_price(ticker, &ticker_price.price)?;
                    tracing::info!("price of {} = {}", ticker, price);

                    if price > Decimal::ONE {
                        tracing::info!("price of {} higher than BTC", ticker);
                    }
                    if price == Decimal::ONE {
                        tracing::info!("price of {} equal to BTC", ticker);
                    }
                    record.price_in_reference = price;
                }
                Err(SpotError::Client(err)) => {
                    tracing::error!("{}", err);
                    record.error = Some(format!("ERROR: {}", err.error_message));
                }
                Err(e) => return Err(e.into()),
            }

            result.push(record);
        }

        Ok(result)
    }

    /// Sort by price and write the report; returns the file written
    pub fn write_to_csv(&self, records: &[PriceRecord]) -> Result<PathBuf> {
        let sorted = sort_by_price(records);

        tracing::info!("start writing data to the file");
        let file_name = report_file_name(Local::now().naive_local());

        match write_report(&self.config.output_dir, &file_name, &sorted) {
            Ok(path) => {
                tracing::info!("data successfully wrote to the {}", file_name);
                Ok(path)
            }
            Err(e) => {
                tracing::error!("write data to csv failed: {}", e);
                Err(e)
            }
        }
    }
}

fn parse_price(ticker: &str, raw: &str) -> Result<Decimal> {
    raw.trim().parse::<Decimal>().map_err(|_| ReportError::InvalidPrice {
        ticker: ticker.to_string(),
        raw: raw.to_string(),
    })
}
