//! Correlation exposure checks
//!
//! A static table of known pairwise correlations guards against stacking
//! several signals that are really the same bet. Unknown pairs count as
//! uncorrelated.

use crate::models::signal::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const KNOWN_CORRELATIONS: &[(&str, &str, f64)] = &[
    // forex
    ("EURUSD", "USDCHF", -0.85),
    ("EURUSD", "GBPUSD", 0.75),
    ("USDJPY", "XAUUSD", -0.60),
    // commodities
    ("XAUUSD", "XAGUSD", 0.80),
    ("OILUSD", "USDCAD", -0.70),
    ("XAUUSD", "SPX500", -0.40),
    // indices
    ("SPX500", "NAS100", 0.90),
    ("SPX500", "DJI30", 0.85),
];

const CORRELATED_GROUPS: &[(&str, &[&str])] = &[
    ("usd-sensitive", &["EURUSD", "GBPUSD", "AUDUSD", "XAUUSD"]),
    ("risk-on", &["SPX500", "NAS100", "AUDUSD", "NZDUSD"]),
    ("risk-off", &["USDJPY", "XAUUSD", "USDCHF"]),
    ("commodities", &["XAUUSD", "XAGUSD", "OILUSD", "COPPER"]),
];

/// Correlation beyond which a same-direction signal is suppressed.
pub const SKIP_CORRELATION: f64 = 0.7;

/// Known correlation between two instruments, 0.0 when unknown. Symmetric.
pub fn correlation(a: &str, b: &str) -> f64 {
    KNOWN_CORRELATIONS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, corr)| *corr)
        .unwrap_or(0.0)
}

/// One currently held (simulated) exposure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exposure {
    pub symbol: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureRecommendation {
    Diversified,
    HighCorrelation,
    TooManyPositions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureReport {
    pub total: usize,
    pub by_group: HashMap<String, usize>,
    pub average_correlation: f64,
    pub recommendation: ExposureRecommendation,
}

/// Summarize how concentrated the current exposures are.
pub fn analyze_exposure(active: &[Exposure]) -> ExposureReport {
    let mut by_group = HashMap::new();
    for (name, members) in CORRELATED_GROUPS {
        let count = active
            .iter()
            .filter(|e| members.contains(&e.symbol.as_str()))
            .count();
        by_group.insert((*name).to_string(), count);
    }

    let mut correlations = Vec::new();
    for i in 0..active.len() {
        for j in i + 1..active.len() {
            correlations.push(correlation(&active[i].symbol, &active[j].symbol).abs());
        }
    }
    let average_correlation = if correlations.is_empty() {
        0.0
    } else {
        correlations.iter().sum::<f64>() / correlations.len() as f64
    };

    let recommendation = if active.len() >= 3 && average_correlation > 0.6 {
        ExposureRecommendation::HighCorrelation
    } else if active.len() >= 5 {
        ExposureRecommendation::TooManyPositions
    } else {
        ExposureRecommendation::Diversified
    };

    ExposureReport {
        total: active.len(),
        by_group,
        average_correlation,
        recommendation,
    }
}

/// Reason to skip a new signal, if it is too correlated with an active
/// same-direction exposure. None means the signal may proceed.
pub fn should_skip(symbol: &str, direction: Direction, active: &[Exposure]) -> Option<String> {
    for exposure in active {
        let corr = correlation(symbol, &exposure.symbol);
        if corr.abs() > SKIP_CORRELATION && direction == exposure.direction {
            return Some(format!(
                "correlation {:.2} with active {} exposure",
                corr, exposure.symbol
            ));
        }
    }
    None
}
