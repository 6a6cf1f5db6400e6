//! Market data primitives shared across the scanner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical OHLC bar.
///
/// Fields are optional because upstream chart APIs return null entries for
/// bars with no trades; the indicator layer filters them per series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(volume),
        }
    }
}

/// Collect the valid (non-null) closes of a candle series, in order.
pub fn valid_closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().filter_map(|c| c.close).collect()
}

/// A single live quote sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

/// Trend label derived from moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Lateral,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Lateral => "lateral",
        }
    }
}

/// Coarse instrument category. Thresholds for proximity, movement and
/// psychological level spacing are looked up per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Forex,
    Metals,
    Energy,
    Index,
    Crypto,
}

impl AssetClass {
    /// Classify an instrument symbol into its asset class.
    pub fn of(symbol: &str) -> AssetClass {
        const METALS: [&str; 5] = ["XAU", "XAG", "XPT", "XPD", "COPPER"];
        const ENERGY: [&str; 2] = ["OIL", "NGAS"];
        const INDICES: [&str; 6] = ["SPX", "NAS", "DJI", "GER", "UK", "JPN"];
        const CRYPTO: [&str; 3] = ["BTC", "ETH", "SOL"];

        if METALS.iter().any(|m| symbol.contains(m)) {
            AssetClass::Metals
        } else if ENERGY.iter().any(|e| symbol.contains(e)) {
            AssetClass::Energy
        } else if INDICES.iter().any(|i| symbol.contains(i)) {
            AssetClass::Index
        } else if CRYPTO.iter().any(|c| symbol.contains(c)) {
            AssetClass::Crypto
        } else {
            AssetClass::Forex
        }
    }

    /// Round-number level spacing (fine step, coarse step) used to derive
    /// psychological support/resistance candidates.
    pub fn psychological_steps(&self) -> (f64, f64) {
        match self {
            AssetClass::Forex => (0.0050, 0.0100),
            AssetClass::Metals => (5.0, 10.0),
            AssetClass::Energy => (0.5, 1.0),
            AssetClass::Index => (100.0, 500.0),
            AssetClass::Crypto => (100.0, 1000.0),
        }
    }
}

/// Transient input bundle for one classification pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketContext {
    pub symbol: String,
    pub price: f64,
    pub trend: Trend,
    /// RSI oscillator value, 0-100.
    pub rsi: f64,
}
