//! Support/resistance level types

use serde::{Deserialize, Serialize};

/// Which side of price a level sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    Support,
    Resistance,
}

impl LevelKind {
    pub fn label(&self) -> &'static str {
        match self {
            LevelKind::Support => "support",
            LevelKind::Resistance => "resistance",
        }
    }
}

/// The current level set for an instrument.
///
/// Supports are ordered descending (nearest below price first), resistances
/// ascending (nearest above price first). After relevance filtering every
/// support sits below the reference price and every resistance above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub supports: Vec<f64>,
    pub resistances: Vec<f64>,
}

impl LevelSet {
    pub fn new(supports: Vec<f64>, resistances: Vec<f64>) -> Self {
        Self {
            supports,
            resistances,
        }
    }

    /// Distance from `price` to the nearest support, if any.
    pub fn nearest_support_distance(&self, price: f64) -> Option<f64> {
        self.supports
            .iter()
            .map(|s| (price - s).abs())
            .min_by(f64::total_cmp)
    }

    /// Distance from `price` to the nearest resistance, if any.
    pub fn nearest_resistance_distance(&self, price: f64) -> Option<f64> {
        self.resistances
            .iter()
            .map(|r| (price - r).abs())
            .min_by(f64::total_cmp)
    }

    pub fn has_both_sides(&self) -> bool {
        !self.supports.is_empty() && !self.resistances.is_empty()
    }
}
