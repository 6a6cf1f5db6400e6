//! Pivot point detection
//!
//! A pivot is a bar strictly more extreme than every valid bar in a
//! symmetric window around it. Upstream chart data carries null entries, so
//! the series is `Option<f64>`; nulls are excluded from each side's
//! comparison set.

use crate::models::levels::LevelKind;

/// Find local extrema in `series`.
///
/// An index qualifies when its value strictly exceeds (for resistance
/// candidates) or strictly undercuts (for support candidates) both the
/// `window` values to its left and the `window` values to its right. An
/// index with no valid neighbors on either side is skipped. Series shorter
/// than `2 * window + 1` produce no pivots.
///
/// Returns qualifying values in index order.
pub fn find_pivots(series: &[Option<f64>], window: usize, kind: LevelKind) -> Vec<f64> {
    let mut pivots = Vec::new();
    if window == 0 || series.len() < 2 * window + 1 {
        return pivots;
    }

    for i in window..series.len() - window {
        let Some(value) = series[i] else {
            continue;
        };

        let left = side_extreme(&series[i - window..i], kind);
        let right = side_extreme(&series[i + 1..i + 1 + window], kind);

        let (Some(left), Some(right)) = (left, right) else {
            continue;
        };

        let qualifies = match kind {
            LevelKind::Resistance => value > left && value > right,
            LevelKind::Support => value < left && value < right,
        };
        if qualifies {
            pivots.push(value);
        }
    }

    pivots
}

/// Most extreme valid value on one side of the candidate, or None when the
/// side holds no valid values.
fn side_extreme(side: &[Option<f64>], kind: LevelKind) -> Option<f64> {
    let valid = side.iter().flatten().copied();
    match kind {
        LevelKind::Resistance => valid.max_by(f64::total_cmp),
        LevelKind::Support => valid.min_by(f64::total_cmp),
    }
}
