//! Static fallback levels
//!
//! Hand-maintained per-instrument levels used whenever live history is too
//! thin to detect anything. Configuration data, not derived by any
//! algorithm. Supports are listed nearest-to-price first (descending),
//! resistances nearest first (ascending).

use crate::models::levels::LevelSet;

/// Fallback levels for unknown instruments.
pub const GENERIC_SUPPORTS: [f64; 2] = [1.0050, 1.0000];
pub const GENERIC_RESISTANCES: [f64; 2] = [1.0100, 1.0150];

/// Look up the shipped level table for `symbol`.
///
/// Always returns a non-empty set on both sides.
pub fn fallback_levels(symbol: &str) -> LevelSet {
    let (supports, resistances): ([f64; 2], [f64; 2]) = match symbol {
        "EURUSD" => ([1.0820, 1.0780], [1.0920, 1.0950]),
        "USDCAD" => ([1.3420, 1.3380], [1.3520, 1.3560]),
        "EURCHF" => ([0.9520, 0.9480], [0.9620, 0.9660]),
        "EURAUD" => ([1.6320, 1.6280], [1.6450, 1.6480]),
        "XAUUSD" => ([2180.0, 2170.0], [2200.0, 2210.0]),
        "XAGUSD" => ([24.70, 24.50], [25.00, 25.20]),
        "OILUSD" => ([77.5, 77.0], [79.0, 79.5]),
        "XPTUSD" => ([925.0, 920.0], [935.0, 940.0]),
        _ => (GENERIC_SUPPORTS, GENERIC_RESISTANCES),
    };

    LevelSet::new(supports.to_vec(), resistances.to_vec())
}
