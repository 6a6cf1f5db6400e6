//! ATR and historical volatility

use crate::models::market::Candle;

pub const DEFAULT_ATR_PERIOD: usize = 14;
pub const DEFAULT_HV_PERIOD: usize = 20;

/// Average True Range over the last `period` bars.
///
/// True range needs the previous close; bars missing any of high/low or a
/// usable previous close are skipped.
pub fn atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let recent = &candles[candles.len() - (period + 1)..];
    let mut true_ranges = Vec::with_capacity(period);

    for pair in recent.windows(2) {
        let (Some(high), Some(low)) = (pair[1].high, pair[1].low) else {
            continue;
        };
        let tr = match pair[0].close {
            Some(prev_close) => (high - low)
                .max((high - prev_close).abs())
                .max((low - prev_close).abs()),
            None => high - low,
        };
        true_ranges.push(tr);
    }

    if true_ranges.is_empty() {
        return None;
    }
    Some(true_ranges.iter().sum::<f64>() / true_ranges.len() as f64)
}

/// Historical volatility: standard deviation of percentage returns over the
/// last `period` returns, expressed in percent.
pub fn historical_volatility(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut returns = Vec::new();
    for pair in closes.windows(2) {
        if pair[0] != 0.0 {
            returns.push((pair[1] - pair[0]) / pair[0]);
        }
    }
    if returns.len() < period {
        return None;
    }

    let recent = &returns[returns.len() - period..];
    let mean = recent.iter().sum::<f64>() / recent.len() as f64;
    let variance =
        recent.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / recent.len() as f64;

    Some(variance.sqrt() * 100.0)
}
