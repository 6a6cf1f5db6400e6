//! Volatility indicators and classification

pub mod atr;

use crate::models::market::AssetClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl VolatilityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            VolatilityLevel::Low => "low",
            VolatilityLevel::Medium => "medium",
            VolatilityLevel::High => "high",
        }
    }

    /// Stop-loss distance multiplier: wider stops in calm markets, tighter
    /// in agitated ones.
    pub fn stop_loss_multiplier(&self) -> f64 {
        match self {
            VolatilityLevel::Low => 1.2,
            VolatilityLevel::Medium => 1.0,
            VolatilityLevel::High => 0.8,
        }
    }

    /// Take-profit distance multiplier: more ambitious targets when the
    /// market actually moves.
    pub fn take_profit_multiplier(&self) -> f64 {
        match self {
            VolatilityLevel::Low => 0.8,
            VolatilityLevel::Medium => 1.0,
            VolatilityLevel::High => 1.3,
        }
    }
}

/// Classify a historical-volatility reading (percent std-dev of returns)
/// into a level, with per-asset-class bands.
pub fn classify_volatility(class: AssetClass, historical_vol_pct: f64) -> VolatilityLevel {
    let (low, medium) = match class {
        AssetClass::Forex => (0.4, 0.8),
        AssetClass::Metals => (0.8, 1.5),
        AssetClass::Energy => (1.0, 2.0),
        AssetClass::Index | AssetClass::Crypto => (0.5, 1.0),
    };

    if historical_vol_pct < low {
        VolatilityLevel::Low
    } else if historical_vol_pct < medium {
        VolatilityLevel::Medium
    } else {
        VolatilityLevel::High
    }
}
