//! Market data provider interface

use crate::errors::ProviderError;
use crate::models::market::Candle;
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch historical candles for a symbol, e.g. range "3mo" at interval
    /// "4h". Bars may carry null fields.
    async fn fetch_ohlc(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, ProviderError>;

    /// Fetch the latest quote for a symbol.
    async fn fetch_price(&self, symbol: &str) -> Result<f64, ProviderError>;
}
