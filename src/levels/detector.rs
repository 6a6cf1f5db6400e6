//! Support/resistance detection over historical OHLC data
//!
//! Pipeline: pivot extraction on highs/lows, enrichment with recent extremes
//! and psychological round numbers, clustering, relevance filtering. Any
//! shortfall or degenerate input degrades to the static fallback table; the
//! detector never fails to its caller.

use crate::errors::DetectError;
use crate::indicators::structure::clustering::cluster_levels;
use crate::indicators::structure::pivots::find_pivots;
use crate::indicators::structure::relevance::filter_relevant;
use crate::levels::fallback::fallback_levels;
use crate::models::levels::{LevelKind, LevelSet};
use crate::models::market::{AssetClass, Candle};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Minimum bar count before pivot detection is attempted at all.
    pub min_bars: usize,
    /// Minimum valid highs and lows after null filtering.
    pub min_valid_samples: usize,
    /// Symmetric pivot window, in bars per side.
    pub pivot_window: usize,
    /// How many trailing bars feed the recent-extremes candidates.
    pub recent_bars: usize,
    /// How many extremes per side to take from the recent window.
    pub recent_extremes: usize,
    /// Cluster tolerance as a fraction of the candidate mean.
    pub cluster_tolerance: f64,
    /// Maximum relative distance from price for a level to stay relevant.
    pub max_relative_distance: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_bars: 50,
            min_valid_samples: 50,
            pivot_window: 5,
            recent_bars: 30,
            recent_extremes: 3,
            cluster_tolerance: crate::indicators::structure::clustering::DEFAULT_TOLERANCE_RATIO,
            max_relative_distance:
                crate::indicators::structure::relevance::DEFAULT_MAX_RELATIVE_DISTANCE,
        }
    }
}

pub struct SupportResistanceDetector {
    config: DetectorConfig,
}

impl SupportResistanceDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Detect the current level set for `symbol`.
    ///
    /// `live_price` is used as the reference price when the history carries
    /// no valid closes. Never panics and never returns an empty side: any
    /// internal failure collapses to the static fallback table.
    pub fn detect(&self, symbol: &str, candles: &[Candle], live_price: Option<f64>) -> LevelSet {
        match self.detect_inner(symbol, candles, live_price) {
            Ok(levels) => levels,
            Err(reason) => {
                debug!(symbol = %symbol, %reason, "level detection fell back to static table");
                fallback_levels(symbol)
            }
        }
    }

    fn detect_inner(
        &self,
        symbol: &str,
        candles: &[Candle],
        live_price: Option<f64>,
    ) -> Result<LevelSet, DetectError> {
        let cfg = &self.config;

        if candles.len() < cfg.min_bars {
            return Err(DetectError::NotEnoughBars {
                got: candles.len(),
                min: cfg.min_bars,
            });
        }

        let high_series: Vec<Option<f64>> = candles.iter().map(|c| c.high).collect();
        let low_series: Vec<Option<f64>> = candles.iter().map(|c| c.low).collect();

        let highs: Vec<f64> = high_series.iter().flatten().copied().collect();
        let lows: Vec<f64> = low_series.iter().flatten().copied().collect();
        if highs.len() < cfg.min_valid_samples {
            return Err(DetectError::SparseSeries {
                side: "high",
                got: highs.len(),
                min: cfg.min_valid_samples,
            });
        }
        if lows.len() < cfg.min_valid_samples {
            return Err(DetectError::SparseSeries {
                side: "low",
                got: lows.len(),
                min: cfg.min_valid_samples,
            });
        }

        let reference = candles
            .iter()
            .rev()
            .find_map(|c| c.close)
            .or(live_price)
            .ok_or(DetectError::NoReferencePrice)?;
        if !reference.is_finite() || reference <= 0.0 {
            return Err(DetectError::DegenerateData);
        }

        let mut resistance_candidates =
            find_pivots(&high_series, cfg.pivot_window, LevelKind::Resistance);
        let mut support_candidates = find_pivots(&low_series, cfg.pivot_window, LevelKind::Support);

        self.push_recent_extremes(&highs, &lows, &mut support_candidates, &mut resistance_candidates);
        self.push_psychological(symbol, reference, &mut support_candidates, &mut resistance_candidates);

        if support_candidates.iter().chain(&resistance_candidates).any(|v| !v.is_finite() || *v <= 0.0)
        {
            return Err(DetectError::DegenerateData);
        }

        let supports = filter_relevant(
            &cluster_levels(&support_candidates, cfg.cluster_tolerance),
            reference,
            LevelKind::Support,
            cfg.max_relative_distance,
        );
        let resistances = filter_relevant(
            &cluster_levels(&resistance_candidates, cfg.cluster_tolerance),
            reference,
            LevelKind::Resistance,
            cfg.max_relative_distance,
        );

        // An empty side after filtering borrows that side from the table.
        let table = fallback_levels(symbol);
        Ok(LevelSet::new(
            if supports.is_empty() { table.supports } else { supports },
            if resistances.is_empty() { table.resistances } else { resistances },
        ))
    }

    /// Add the strongest highs/lows of the trailing window as candidates.
    /// Recent rejection points matter even when they never formed a pivot.
    fn push_recent_extremes(
        &self,
        highs: &[f64],
        lows: &[f64],
        support_candidates: &mut Vec<f64>,
        resistance_candidates: &mut Vec<f64>,
    ) {
        let cfg = &self.config;

        let mut recent_highs: Vec<f64> =
            highs[highs.len().saturating_sub(cfg.recent_bars)..].to_vec();
        recent_highs.sort_by(|a, b| f64::total_cmp(b, a));
        resistance_candidates.extend(recent_highs.into_iter().take(cfg.recent_extremes));

        let mut recent_lows: Vec<f64> =
            lows[lows.len().saturating_sub(cfg.recent_bars)..].to_vec();
        recent_lows.sort_by(f64::total_cmp);
        support_candidates.extend(recent_lows.into_iter().take(cfg.recent_extremes));
    }

    /// Add the nearest round-number levels below and above the reference
    /// price, at both the fine and coarse step for the instrument's class.
    fn push_psychological(
        &self,
        symbol: &str,
        reference: f64,
        support_candidates: &mut Vec<f64>,
        resistance_candidates: &mut Vec<f64>,
    ) {
        let (fine, coarse) = AssetClass::of(symbol).psychological_steps();
        for step in [fine, coarse] {
            if step <= 0.0 {
                continue;
            }
            let below = (reference / step).floor() * step;
            let above = (reference / step).ceil() * step;
            if below < reference {
                support_candidates.push(below);
            }
            if above > reference {
                resistance_candidates.push(above);
            }
        }
    }
}

impl Default for SupportResistanceDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
