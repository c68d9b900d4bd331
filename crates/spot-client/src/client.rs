//! Spot REST Client
//!
//! Builds requests against the configured base URL, attaches the persistent
//! headers, and turns HTTP outcomes into `SpotError` variants.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::SpotApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result, ServerError, SpotError};
use crate::model::TickerPrice;

/// Header carrying the API key (`X-MBX-APIKEY`)
pub const API_KEY_HEADER: &str = "x-mbx-apikey";

/// User-agent sent with every request
pub const USER_AGENT_VALUE: &str = concat!("exchange-rates/", env!("CARGO_PKG_VERSION"));

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";
const PING_PATH: &str = "/api/v3/ping";
const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";

/// HTTP client for the spot market endpoints
pub struct SpotClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SpotClient {
    /// Create a client with persistent headers and the configured timeouts
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| SpotError::Config("API key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.effective_connect_timeout())
            .build()?;

        Ok(Self { http, config })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and classify the response
    ///
    /// GET-style methods carry `params` in the query string; other methods
    /// send them as a form body. Returns the JSON body, or the raw text as a
    /// `Value::String` when the body is not JSON.
    pub async fn query(
        &self,
        url_path: &str,
        method: Method,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, url_path);
        debug!("url: {}", url);

        let builder = self.http.request(method.clone(), &url);
        let builder = if carries_query(&method) {
            builder.query(params)
        } else {
            builder.form(params)
        };
        let request = builder.build()?;
        debug!("request: {} {}", request.method(), request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| SpotError::from_transport(&url, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;
        debug!("raw response: {}", text);

        check_response(status, &headers, &text)?;
        Ok(decode_body(text))
    }

    /// Connectivity probe
    pub async fn ping(&self) -> Result<Value> {
        self.query(PING_PATH, Method::GET, &[]).await
    }

    /// Latest price for a trading pair
    pub async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice> {
        let body = self
            .query(TICKER_PRICE_PATH, Method::GET, &[("symbol", symbol)])
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl SpotApi for SpotClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn ping(&self) -> Result<Value> {
        Self::ping(self).await
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice> {
        Self::ticker_price(self, symbol).await
    }
}

fn carries_query(method: &Method) -> bool {
    *method == Method::GET || *method == Method::DELETE || *method == Method::HEAD
}

/// Map a response status onto the error taxonomy
pub fn check_response(status: StatusCode, headers: &HeaderMap, body: &str) -> Result<()> {
    let status_code = status.as_u16();
    if status_code < 400 {
        return Ok(());
    }

    if status_code < 500 {
        let error = match parse_error_envelope(body) {
            Some((code, msg, data)) => ClientError {
                status_code,
                error_code: Some(code),
                error_message: msg,
                headers: Some(headers.clone()),
                error_data: data,
            },
            // headers travel in the error_data slot here
            None => ClientError {
                status_code,
                error_code: None,
                error_message: body.to_string(),
                headers: None,
                error_data: Some(headers_to_json(headers)),
            },
        };
        return Err(error.into());
    }

    Err(ServerError {
        status_code,
        message: body.to_string(),
    }
    .into())
}

/// Extract `code`, `msg` and optional `data` from an exchange error body
fn parse_error_envelope(body: &str) -> Option<(i64, String, Option<Value>)> {
    let Ok(Value::Object(mut err)) = serde_json::from_str::<Value>(body) else {
        return None;
    };

    let code = err.get("code")?.as_i64()?;
    let msg = err.get("msg")?.as_str()?.to_string();
    let data = err.remove("data");

    Some((code, msg, data))
}

fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        map.insert(name.as_str().to_string(), Value::String(joined));
    }
    Value::Object(map)
}

fn decode_body(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}
