//! HTTP stock source.
//!
//! Issues a single `GET {base_url}/stocks-screener` and decodes the
//! `{ "halal": [...] }` payload. No retries: any transport error, non-2xx
//! status, or undecodable body is returned as a `FetchError`.

use std::time::Duration;

use tracing::debug;

use super::provider::{FetchError, StockSource};
use crate::config::ScreenerConfig;
use crate::domain::{ScreenerPayload, StockRow};

pub struct HttpStockSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpStockSource {
    pub fn new(config: &ScreenerConfig) -> Result<Self, FetchError> {
        // The blocking client defaults to a 30s timeout; absent config means none.
        let builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("halal-screener/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout_secs.map(Duration::from_secs));
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.stocks_url(),
        })
    }

    /// Use a pre-built client, e.g. one with proxies disabled.
    pub fn with_client(client: reqwest::blocking::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode a response body into the row list.
    pub fn parse_body(body: &str) -> Result<Vec<StockRow>, FetchError> {
        let payload: ScreenerPayload =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(payload.halal)
    }
}

impl StockSource for HttpStockSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_all(&self) -> Result<Vec<StockRow>, FetchError> {
        debug!(url = %self.url, "requesting stock list");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::parse_body(&body)
    }
}
