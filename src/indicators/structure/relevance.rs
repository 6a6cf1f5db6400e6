//! Level relevance filtering
//!
//! Keeps only levels on the correct side of the reference price and within a
//! maximum relative distance, nearest first. This distance bounds which
//! levels are worth reporting at all; the much tighter per-asset-class
//! proximity threshold used for signal triggering lives in the classifier.

use crate::models::levels::LevelKind;

/// Default maximum relative distance from the reference price.
pub const DEFAULT_MAX_RELATIVE_DISTANCE: f64 = 0.05;

/// At most this many levels survive per side.
pub const MAX_LEVELS_PER_SIDE: usize = 3;

/// Filter `levels` against `reference_price`.
///
/// Supports must sit strictly below the price, resistances strictly above,
/// both within `max_relative_distance` of it. Supports come back descending
/// (closest below price first), resistances ascending (closest above first),
/// truncated to [`MAX_LEVELS_PER_SIDE`].
pub fn filter_relevant(
    levels: &[f64],
    reference_price: f64,
    kind: LevelKind,
    max_relative_distance: f64,
) -> Vec<f64> {
    if !reference_price.is_finite() || reference_price <= 0.0 {
        return Vec::new();
    }

    let mut relevant: Vec<f64> = levels
        .iter()
        .copied()
        .filter(|level| match kind {
            LevelKind::Support => {
                *level < reference_price
                    && (reference_price - level) / reference_price < max_relative_distance
            }
            LevelKind::Resistance => {
                *level > reference_price
                    && (level - reference_price) / reference_price < max_relative_distance
            }
        })
        .collect();

    match kind {
        LevelKind::Support => relevant.sort_by(|a, b| f64::total_cmp(b, a)),
        LevelKind::Resistance => relevant.sort_by(f64::total_cmp),
    }
    relevant.truncate(MAX_LEVELS_PER_SIDE);
    relevant
}
