//! Response Models

use serde::{Deserialize, Serialize};

/// Body of `GET /api/v3/ticker/price`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerPrice {
    /// Trading pair (e.g., "ETHBTC")
    #[serde(default)]
    pub symbol: String,

    /// Last price as the exchange formats it (e.g., "0.05123000")
    pub price: String,
}

impl TickerPrice {
    pub fn new(symbol: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
        }
    }
}
