//! # rate-report
//!
//! Prices a list of tickers against BTC and writes a timestamped CSV report.
//!
//! ## Flow
//!
//! ```text
//! check_connectivity ──► get_prices(["ETH", "DOGE", ...]) ──► write_to_csv
//!        │                       │                                 │
//!   GET /api/v3/ping     GET /api/v3/ticker/price          ./output/exchange_rates_
//!                        ?symbol=ETHBTC, DOGEBTC, ...      <YYYYMMDD-HHMMSS>.csv
//! ```
//!
//! A 4xx for one ticker is written into that ticker's row and the batch
//! carries on. A 5xx, a dropped connection or an unreadable price stops the
//! run with no report.
//!
//! ## Output
//!
//! ```text
//! ticker,price_in_btc,error
//! DOGE,0,ERROR: Invalid symbol
//! ETH,0.05,
//! ```

pub mod error;
pub mod model;
pub mod svckit;

pub use error::{ReportError, Result};
pub use model::{CSV_HEADER, PriceRecord, REFERENCE_SYMBOL};
pub use svckit::{PriceReportingService, ReportConfig, sort_by_price};
