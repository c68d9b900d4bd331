//! Mock Spot Client
//!
//! For testing and demo purposes. Replays scripted answers per symbol and
//! records every call it receives.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::SpotApi;
use crate::error::{ClientError, Result, ServerError, SpotError};
use crate::model::TickerPrice;

/// Binance answers unknown pairs with this code
const INVALID_SYMBOL_CODE: i64 = -1121;

/// A scripted exchange answer
#[derive(Clone, Debug)]
pub enum MockReply {
    /// 200 with the given price string
    Price(String),

    /// 4xx with the exchange error envelope
    ClientError { status: u16, code: i64, msg: String },

    /// 5xx with a raw body
    ServerError { status: u16, body: String },

    /// Connection refused before any HTTP exchange
    Unreachable,
}

impl MockReply {
    fn resolve(self, symbol: &str, base_url: &str) -> Result<TickerPrice> {
        match self {
            Self::Price(price) => Ok(TickerPrice::new(symbol, price)),
            Self::ClientError { status, code, msg } => Err(ClientError {
                status_code: status,
                error_code: Some(code),
                error_message: msg,
                headers: Some(reqwest::header::HeaderMap::new()),
                error_data: None,
            }
            .into()),
            Self::ServerError { status, body } => Err(ServerError {
                status_code: status,
                message: body,
            }
            .into()),
            Self::Unreachable => Err(SpotError::Connection {
                url: base_url.to_string(),
                reason: "connection refused".into(),
            }),
        }
    }
}

/// Mock spot client with scripted answers
pub struct MockSpotClient {
    base_url: String,
    ping: Option<MockReply>,
    replies: HashMap<String, MockReply>,
    calls: Mutex<Vec<String>>,
}

impl Default for MockSpotClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSpotClient {
    pub fn new() -> Self {
        Self {
            base_url: "http://mock.exchange".into(),
            ping: None,
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Script the answer to `ping` (healthy by default)
    #[must_use]
    pub fn with_ping(mut self, reply: MockReply) -> Self {
        self.ping = Some(reply);
        self
    }

    /// Script the answer for one trading pair
    #[must_use]
    pub fn with_reply(mut self, symbol: impl Into<String>, reply: MockReply) -> Self {
        self.replies.insert(symbol.into().to_uppercase(), reply);
        self
    }

    #[must_use]
    pub fn with_price(self, symbol: impl Into<String>, price: impl Into<String>) -> Self {
        self.with_reply(symbol, MockReply::Price(price.into()))
    }

    #[must_use]
    pub fn with_client_error(
        self,
        symbol: impl Into<String>,
        status: u16,
        code: i64,
        msg: impl Into<String>,
    ) -> Self {
        self.with_reply(
            symbol,
            MockReply::ClientError {
                status,
                code,
                msg: msg.into(),
            },
        )
    }

    #[must_use]
    pub fn with_server_error(
        self,
        symbol: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.with_reply(
            symbol,
            MockReply::ServerError {
                status,
                body: body.into(),
            },
        )
    }

    /// Every call received so far, in order ("ping" or the requested pair)
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.to_string());
        }
    }
}

#[async_trait]
impl SpotApi for MockSpotClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ping(&self) -> Result<Value> {
        self.record("ping");
        match self.ping.clone() {
            None => Ok(json!({})),
            Some(reply) => reply.resolve("", &self.base_url).map(|_| json!({})),
        }
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice> {
        self.record(symbol);
        let reply = self.replies.get(&symbol.to_uppercase()).cloned().unwrap_or_else(|| {
            MockReply::ClientError {
                status: 400,
                code: INVALID_SYMBOL_CODE,
                msg: "Invalid symbol.".into(),
            }
        });

        reply.resolve(symbol, &self.base_url)
    }
}
