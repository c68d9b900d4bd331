//! Report Model
//!
//! One row of the exchange-rate report. Uses `rust_decimal` for prices,
//! never f64.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset every price is expressed in
pub const REFERENCE_SYMBOL: &str = "BTC";

/// CSV columns, in the order `PriceRecord` serializes them
pub const CSV_HEADER: [&str; 3] = ["ticker", "price_in_btc", "error"];

/// Price of one ticker relative to the reference asset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Requested symbol (e.g., "ETH")
    pub ticker: String,

    /// Price in units of the reference asset; zero unless the lookup succeeded
    #[serde(rename = "price_in_btc", with = "rust_decimal::serde::str")]
    pub price_in_reference: Decimal,

    /// Why the lookup failed, if it did
    pub error: Option<String>,
}

impl PriceRecord {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price_in_reference = price;
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Trading pair queried for this ticker (e.g., "ETHBTC")
    pub fn pair(&self) -> String {
        format!("{}{}", self.ticker, REFERENCE_SYMBOL)
    }
}
