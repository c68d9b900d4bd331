//! Error Types for the Spot Client

use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpotError>;

/// HTTP 4xx answer from the exchange
///
/// When the body carries the exchange's `{"code": .., "msg": ..}` envelope,
/// `error_code` is set and the response headers sit in `headers`. When it
/// does not, `error_code` and `headers` are `None` and the response headers
/// are reported through `error_data` instead.
#[derive(Error, Debug, Clone)]
#[error("client error {status_code}: {error_message}")]
pub struct ClientError {
    pub status_code: u16,
    pub error_code: Option<i64>,
    pub error_message: String,
    pub headers: Option<HeaderMap>,
    pub error_data: Option<Value>,
}

/// HTTP 5xx answer from the exchange
#[derive(Error, Debug, Clone)]
#[error("server error {status_code}: {message}")]
pub struct ServerError {
    pub status_code: u16,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum SpotError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Server(#[from] ServerError),

    /// The connection could not be established at all
    #[error("Connection to {url} failed: {reason}")]
    Connection { url: String, reason: String },

    /// Any other transport failure (timeout, interrupted body, ...)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpotError {
    /// Split a transport failure into connect vs. everything else
    pub fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            Self::Transport(err)
        }
    }

    /// HTTP status carried by the error, if the exchange answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client(e) => Some(e.status_code),
            Self::Server(e) => Some(e.status_code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Client(_))
    }

    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
