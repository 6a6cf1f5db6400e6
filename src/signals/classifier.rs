//! Market-structure classification
//!
//! Combines current price, trend, RSI and the detected level set into a
//! direction/confidence verdict. Pure: same inputs, same verdict. Degenerate
//! input degrades to an RSI-only fallback; the classifier never fails to its
//! caller because it runs once per instrument inside a loop that must not
//! abort.

use crate::models::levels::LevelSet;
use crate::models::market::{AssetClass, MarketContext, Trend};
use crate::models::signal::{Confidence, Direction, SignalVerdict, Zone};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Per-asset-class proximity factors: a level counts as "tested" when price
/// sits within `price * factor` of it. Tunable configuration, not law.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityConfig {
    pub forex: f64,
    pub metals: f64,
    pub energy: f64,
    pub index: f64,
    pub crypto: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            forex: 0.002,
            metals: 0.005,
            energy: 0.008,
            index: 0.012,
            crypto: 0.015,
        }
    }
}

impl ProximityConfig {
    pub fn factor_for(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Forex => self.forex,
            AssetClass::Metals => self.metals,
            AssetClass::Energy => self.energy,
            AssetClass::Index => self.index,
            AssetClass::Crypto => self.crypto,
        }
    }
}

/// Widening applied to the proximity threshold for medium-confidence rules.
const MEDIUM_THRESHOLD_FACTOR: f64 = 1.5;

const RSI_OVERSOLD_HIGH: f64 = 32.0;
const RSI_OVERSOLD_MEDIUM: f64 = 35.0;
const RSI_OVERBOUGHT_HIGH: f64 = 68.0;
const RSI_OVERBOUGHT_MEDIUM: f64 = 65.0;

pub struct MarketStructureClassifier {
    proximity: ProximityConfig,
}

impl MarketStructureClassifier {
    pub fn new(proximity: ProximityConfig) -> Self {
        Self { proximity }
    }

    /// Classify one instrument against its level set.
    ///
    /// Priority order, first match wins: high-confidence buy, high-confidence
    /// sell, medium buy, medium sell, no signal. The rationale names the rule
    /// that fired.
    pub fn classify(&self, ctx: &MarketContext, levels: &LevelSet) -> SignalVerdict {
        if !ctx.price.is_finite() || ctx.price <= 0.0 || !levels.has_both_sides() {
            return self.oscillator_fallback(ctx);
        }

        let (Some(dist_support), Some(dist_resistance)) = (
            levels.nearest_support_distance(ctx.price),
            levels.nearest_resistance_distance(ctx.price),
        ) else {
            return self.oscillator_fallback(ctx);
        };

        let threshold = ctx.price * self.proximity.factor_for(AssetClass::of(&ctx.symbol));

        let zone = if dist_support < dist_resistance {
            Zone::Support
        } else if dist_resistance < dist_support {
            Zone::Resistance
        } else {
            Zone::Neutral
        };

        let (direction, confidence, rationale) = if zone == Zone::Support
            && dist_support < threshold
            && ctx.rsi < RSI_OVERSOLD_HIGH
            && matches!(ctx.trend, Trend::Bullish | Trend::Lateral)
        {
            (
                Direction::Buy,
                Confidence::High,
                format!(
                    "rebound at support: {} on support + RSI oversold ({:.1}) + {} trend",
                    ctx.symbol,
                    ctx.rsi,
                    ctx.trend.label()
                ),
            )
        } else if zone == Zone::Resistance
            && dist_resistance < threshold
            && ctx.rsi > RSI_OVERBOUGHT_HIGH
            && matches!(ctx.trend, Trend::Bearish | Trend::Lateral)
        {
            (
                Direction::Sell,
                Confidence::High,
                format!(
                    "rejection at resistance: {} on resistance + RSI overbought ({:.1}) + {} trend",
                    ctx.symbol,
                    ctx.rsi,
                    ctx.trend.label()
                ),
            )
        } else if zone == Zone::Support
            && dist_support < threshold * MEDIUM_THRESHOLD_FACTOR
            && ctx.rsi < RSI_OVERSOLD_MEDIUM
            && ctx.trend != Trend::Bearish
        {
            (
                Direction::Buy,
                Confidence::Medium,
                format!(
                    "near support: {} close to support with weak RSI ({:.1})",
                    ctx.symbol, ctx.rsi
                ),
            )
        } else if zone == Zone::Resistance
            && dist_resistance < threshold * MEDIUM_THRESHOLD_FACTOR
            && ctx.rsi > RSI_OVERBOUGHT_MEDIUM
            && ctx.trend != Trend::Bullish
        {
            (
                Direction::Sell,
                Confidence::Medium,
                format!(
                    "near resistance: {} close to resistance with stretched RSI ({:.1})",
                    ctx.symbol, ctx.rsi
                ),
            )
        } else {
            (
                Direction::None,
                Confidence::Low,
                format!("outside key zones: {}", ctx.symbol),
            )
        };

        SignalVerdict {
            symbol: ctx.symbol.clone(),
            direction,
            confidence,
            zone,
            rationale,
            price: ctx.price,
            nearest_support_distance: Some(dist_support),
            nearest_resistance_distance: Some(dist_resistance),
            timestamp: Utc::now(),
        }
    }

    /// RSI-only verdict used when the level set is unusable.
    fn oscillator_fallback(&self, ctx: &MarketContext) -> SignalVerdict {
        let (direction, confidence, rationale) = if ctx.rsi < RSI_OVERSOLD_MEDIUM {
            (
                Direction::Buy,
                Confidence::Medium,
                format!("oscillator fallback: {} RSI oversold ({:.1})", ctx.symbol, ctx.rsi),
            )
        } else if ctx.rsi > RSI_OVERBOUGHT_MEDIUM {
            (
                Direction::Sell,
                Confidence::Medium,
                format!("oscillator fallback: {} RSI overbought ({:.1})", ctx.symbol, ctx.rsi),
            )
        } else {
            (
                Direction::None,
                Confidence::Low,
                format!("oscillator fallback: {} RSI neutral ({:.1})", ctx.symbol, ctx.rsi),
            )
        };

        SignalVerdict {
            symbol: ctx.symbol.clone(),
            direction,
            confidence,
            zone: Zone::Neutral,
            rationale,
            price: ctx.price,
            nearest_support_distance: None,
            nearest_resistance_distance: None,
            timestamp: Utc::now(),
        }
    }
}

impl Default for MarketStructureClassifier {
    fn default() -> Self {
        Self::new(ProximityConfig::default())
    }
}
