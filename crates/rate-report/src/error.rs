//! Error Types for Rate Reporting

use spot_client::SpotError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{base_url} connectivity problems")]
    Connectivity { base_url: String },

    #[error("Exchange error: {0}")]
    Spot(#[from] SpotError),

    #[error("Price for {ticker} is not a decimal: {raw:?}")]
    InvalidPrice { ticker: String, raw: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ReportError {
    /// The underlying exchange error, if any
    pub const fn spot_error(&self) -> Option<&SpotError> {
        match self {
            Self::Spot(e) => Some(e),
            _ => None,
        }
    }

    /// Failure happened while writing the report file
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Csv(_))
    }
}
