//! Moving-average trend detection

use crate::models::market::Trend;

pub const FAST_PERIOD: usize = 10;
pub const SLOW_PERIOD: usize = 20;

/// Relative separation the fast average must show over the slow one before
/// the trend stops being Lateral.
pub const SEPARATION_BAND: f64 = 0.002;

fn sma(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Label the trend from a close series: fast SMA vs slow SMA with a 0.2%
/// separation band. Series shorter than the slow period are Lateral.
pub fn detect_trend(closes: &[f64]) -> Trend {
    if closes.len() < SLOW_PERIOD {
        return Trend::Lateral;
    }

    let fast = sma(&closes[closes.len() - FAST_PERIOD..]);
    let slow = sma(&closes[closes.len() - SLOW_PERIOD..]);

    match (fast, slow) {
        (Some(fast), Some(slow)) if fast > slow * (1.0 + SEPARATION_BAND) => Trend::Bullish,
        (Some(fast), Some(slow)) if fast < slow * (1.0 - SEPARATION_BAND) => Trend::Bearish,
        _ => Trend::Lateral,
    }
}
