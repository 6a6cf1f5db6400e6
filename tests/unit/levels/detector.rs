use chrono::{Duration, Utc};
use sentrix::levels::detector::{DetectorConfig, SupportResistanceDetector};
use sentrix::levels::fallback::fallback_levels;
use sentrix::models::market::Candle;

/// Range-bound market oscillating between ~1.0695 and ~1.0805 with a
/// 20-bar cycle; the last close sits near the bottom of the range.
fn triangle_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(4 * count as i64);
    (0..count)
        .map(|i| {
            let phase = i % 20;
            let tri = if phase < 10 { phase } else { 20 - phase } as f64;
            let price = 1.07 + tri * 0.001;
            Candle::new(
                price,
                price + 0.0005,
                price - 0.0005,
                price,
                1_000.0,
                start + Duration::hours(4 * i as i64),
            )
        })
        .collect()
}

#[test]
fn empty_history_falls_back_to_the_static_table() {
    let detector = SupportResistanceDetector::default();
    let levels = detector.detect("EURUSD", &[], None);
    assert_eq!(levels, fallback_levels("EURUSD"));
    assert!(levels.has_both_sides());
}

#[test]
fn ten_bars_fall_back_to_the_literal_table_values() {
    let detector = SupportResistanceDetector::default();
    let levels = detector.detect("EURUSD", &triangle_candles(10), None);
    assert_eq!(levels.supports, vec![1.0820, 1.0780]);
    assert_eq!(levels.resistances, vec![1.0920, 1.0950]);
}

#[test]
fn unknown_instrument_gets_the_generic_fallback() {
    let detector = SupportResistanceDetector::default();
    let levels = detector.detect("ZZZXYZ", &[], None);
    assert!(levels.has_both_sides());
    assert_eq!(levels, fallback_levels("ZZZXYZ"));
}

#[test]
fn range_market_detects_levels_on_the_correct_sides() {
    let detector = SupportResistanceDetector::default();
    let candles = triangle_candles(120);
    let reference = candles.last().unwrap().close.unwrap();

    let levels = detector.detect("EURUSD", &candles, None);

    assert!(levels.has_both_sides());
    assert!(levels.supports.len() <= 3);
    assert!(levels.resistances.len() <= 3);
    assert!(levels.supports.iter().all(|s| *s < reference));
    assert!(levels.resistances.iter().all(|r| *r > reference));

    // The range floor should be the nearest support.
    let nearest = levels.supports[0];
    assert!((nearest - 1.0695).abs() < 0.002);
}

#[test]
fn all_null_highs_fall_back() {
    let mut candles = triangle_candles(80);
    for candle in &mut candles {
        candle.high = None;
    }
    let detector = SupportResistanceDetector::default();
    let levels = detector.detect("EURUSD", &candles, None);
    assert_eq!(levels, fallback_levels("EURUSD"));
}

#[test]
fn non_finite_close_falls_back_instead_of_panicking() {
    let mut candles = triangle_candles(80);
    if let Some(last) = candles.last_mut() {
        last.close = Some(f64::NAN);
    }
    let detector = SupportResistanceDetector::default();
    let levels = detector.detect("EURUSD", &candles, None);
    assert!(levels.has_both_sides());
}

#[test]
fn stricter_minimum_bar_count_is_honored() {
    let config = DetectorConfig {
        min_bars: 200,
        ..DetectorConfig::default()
    };
    let detector = SupportResistanceDetector::new(config);
    let levels = detector.detect("EURUSD", &triangle_candles(120), None);
    assert_eq!(levels, fallback_levels("EURUSD"));
}
