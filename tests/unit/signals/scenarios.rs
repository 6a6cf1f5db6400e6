//! End-to-end scenarios: detector plus classifier over synthetic markets

use chrono::{Duration, Utc};
use sentrix::levels::detector::SupportResistanceDetector;
use sentrix::models::market::{Candle, MarketContext, Trend};
use sentrix::models::signal::{Confidence, Direction, Zone};
use sentrix::signals::classifier::MarketStructureClassifier;

/// Range-bound market cycling between ~1.0695 and ~1.0805 every 20 bars.
/// The series ends one bar off the range floor.
fn range_market(count: usize) -> Vec<Candle> {
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

fn classify_at(candles: &[Candle], trend: Trend, rsi: f64) -> sentrix::models::signal::SignalVerdict {
    let price = candles.last().unwrap().close.unwrap();
    let detector = SupportResistanceDetector::default();
    let levels = detector.detect("EURUSD", candles, Some(price));
    let classifier = MarketStructureClassifier::default();
    classifier.classify(
        &MarketContext {
            symbol: "EURUSD".to_string(),
            price,
            trend,
            rsi,
        },
        &levels,
    )
}

#[test]
fn oversold_bounce_off_the_range_floor_is_a_high_confidence_buy() {
    let candles = range_market(120);
    let verdict = classify_at(&candles, Trend::Lateral, 28.0);

    assert_eq!(verdict.zone, Zone::Support);
    assert_eq!(verdict.direction, Direction::Buy);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn neutral_oscillator_in_the_same_spot_stays_flat() {
    let candles = range_market(120);
    let verdict = classify_at(&candles, Trend::Lateral, 50.0);

    assert_eq!(verdict.direction, Direction::None);
    assert_eq!(verdict.confidence, Confidence::Low);
}

#[test]
fn bearish_trend_vetoes_the_bounce() {
    let candles = range_market(120);
    let verdict = classify_at(&candles, Trend::Bearish, 28.0);

    assert_eq!(verdict.direction, Direction::None);
}

#[test]
fn thin_history_still_classifies_via_the_fallback_table() {
    // 10 bars force the static EURUSD table; price 1.0825 sits on its
    // 1.0820 support.
    let mut candles = range_market(10);
    for candle in &mut candles {
        candle.close = Some(1.0825);
    }
    let verdict = classify_at(&candles, Trend::Bullish, 28.0);

    assert_eq!(verdict.zone, Zone::Support);
    assert_eq!(verdict.direction, Direction::Buy);
    assert_eq!(verdict.confidence, Confidence::High);
}
