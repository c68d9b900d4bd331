//! Exchange API Seam
//!
//! The operations the reporting layer needs from an exchange.

mod mock;

pub use mock::{MockReply, MockSpotClient};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::model::TickerPrice;

/// Spot market API (Strategy pattern)
///
/// `SpotClient` talks to a real exchange; `MockSpotClient` replays scripted
/// answers for tests and demos.
#[async_trait]
pub trait SpotApi: Send + Sync {
    /// API origin requests are sent to
    fn base_url(&self) -> &str;

    /// Connectivity probe; any non-error answer means reachable
    async fn ping(&self) -> Result<Value>;

    /// Latest price for a trading pair (e.g., "ETHBTC")
    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice>;
}
