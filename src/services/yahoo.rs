//! Yahoo Finance chart API provider

use crate::errors::ProviderError;
use crate::models::market::Candle;
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Map a scanner symbol onto Yahoo's ticker.
pub fn yahoo_symbol(symbol: &str) -> Option<&'static str> {
    match symbol {
        "EURUSD" => Some("EURUSD=X"),
        "USDCAD" => Some("CAD=X"),
        "EURCHF" => Some("EURCHF=X"),
        "EURAUD" => Some("EURAUD=X"),
        "XAUUSD" => Some("GC=F"),
        "XAGUSD" => Some("SI=F"),
        "OILUSD" => Some("CL=F"),
        "XPTUSD" => Some("PL=F"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize, Default)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

pub struct YahooProvider {
    http: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different chart endpoint (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("Mozilla/5.0")
            .build()
            .unwrap_or_default();
        Self { http, base_url }
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<ChartResult, ProviderError> {
        let ticker = yahoo_symbol(symbol)
            .ok_or_else(|| ProviderError::UnknownInstrument(symbol.to_string()))?;

        let url = format!("{}/{}", self.base_url, ticker);
        let response = self
            .http
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: ChartResponse = response.json().await?;
        body.chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| ProviderError::Malformed("chart.result missing or empty".to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_ohlc(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, ProviderError> {
        let result = self.fetch_chart(symbol, range, interval).await?;

        let timestamps = result
            .timestamp
            .ok_or_else(|| ProviderError::Malformed("timestamp array missing".to_string()))?;
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("quote block missing".to_string()))?;

        let at = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let Some(timestamp) = DateTime::from_timestamp(*ts, 0) else {
                continue;
            };
            candles.push(Candle {
                timestamp,
                open: at(&quote.open, i),
                high: at(&quote.high, i),
                low: at(&quote.low, i),
                close: at(&quote.close, i),
                volume: at(&quote.volume, i),
            });
        }

        debug!(symbol = %symbol, bars = candles.len(), range = %range, interval = %interval, "fetched chart history");
        Ok(candles)
    }

    async fn fetch_price(&self, symbol: &str) -> Result<f64, ProviderError> {
        let result = self.fetch_chart(symbol, "1d", "5m").await?;

        if let Some(price) = result.meta.and_then(|m| m.regular_market_price) {
            return Ok(price);
        }

        // Some tickers omit the meta price; fall back to the last close.
        result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.iter().rev().find_map(|c| *c))
            .ok_or_else(|| ProviderError::Malformed("no usable price in chart".to_string()))
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}
