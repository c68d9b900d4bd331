//! # spot-client
//!
//! Client for the public spot endpoints of a Binance-compatible exchange.
//!
//! Every request carries the same persistent headers (JSON content type, a
//! fixed user agent and the `X-MBX-APIKEY` key), and every response goes
//! through one classification step:
//!
//! ```text
//! status < 400   → Ok(body)               JSON, or raw text if not JSON
//! 400..=499      → SpotError::Client      code/msg from the error envelope
//! 500..          → SpotError::Server      status + raw body
//! no connection  → SpotError::Connection
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spot_client::{ClientConfig, SpotClient};
//!
//! let client = SpotClient::new(ClientConfig::new("https://api.binance.com", ""))?;
//! client.ping().await?;
//! let eth = client.ticker_price("ETHBTC").await?;
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use api::{MockReply, MockSpotClient, SpotApi};
pub use client::SpotClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result, ServerError, SpotError};
pub use model::TickerPrice;
