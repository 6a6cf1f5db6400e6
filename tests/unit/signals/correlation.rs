use sentrix::models::signal::Direction;
use sentrix::signals::correlation::{
    analyze_exposure, correlation, should_skip, Exposure, ExposureRecommendation,
};

fn exposure(symbol: &str, direction: Direction) -> Exposure {
    Exposure {
        symbol: symbol.to_string(),
        direction,
    }
}

#[test]
fn known_correlations_are_symmetric() {
    assert_eq!(correlation("EURUSD", "USDCHF"), -0.85);
    assert_eq!(correlation("USDCHF", "EURUSD"), -0.85);
}

#[test]
fn unknown_pairs_count_as_uncorrelated() {
    assert_eq!(correlation("EURUSD", "XPTUSD"), 0.0);
}

#[test]
fn highly_correlated_same_direction_signal_is_skipped() {
    let active = vec![exposure("EURUSD", Direction::Buy)];
    let reason = should_skip("GBPUSD", Direction::Buy, &active);
    assert!(reason.is_some());
    assert!(reason.unwrap().contains("EURUSD"));
}

#[test]
fn opposite_direction_signal_is_allowed() {
    let active = vec![exposure("EURUSD", Direction::Buy)];
    assert!(should_skip("GBPUSD", Direction::Sell, &active).is_none());
}

#[test]
fn uncorrelated_signal_is_allowed() {
    let active = vec![exposure("EURUSD", Direction::Buy)];
    assert!(should_skip("XPTUSD", Direction::Buy, &active).is_none());
}

#[test]
fn no_active_exposure_never_skips() {
    assert!(should_skip("EURUSD", Direction::Buy, &[]).is_none());
}

#[test]
fn small_uncorrelated_book_is_diversified() {
    let active = vec![
        exposure("EURUSD", Direction::Buy),
        exposure("XPTUSD", Direction::Sell),
    ];
    let report = analyze_exposure(&active);
    assert_eq!(report.total, 2);
    assert_eq!(report.recommendation, ExposureRecommendation::Diversified);
}

#[test]
fn crowded_book_pauses_new_positions() {
    let active = vec![
        exposure("EURUSD", Direction::Buy),
        exposure("XPTUSD", Direction::Buy),
        exposure("USDJPY", Direction::Buy),
        exposure("OILUSD", Direction::Buy),
        exposure("EURAUD", Direction::Buy),
    ];
    let report = analyze_exposure(&active);
    assert_eq!(
        report.recommendation,
        ExposureRecommendation::TooManyPositions
    );
}

#[test]
fn average_correlation_uses_absolute_values() {
    let active = vec![
        exposure("SPX500", Direction::Buy),
        exposure("NAS100", Direction::Buy),
        exposure("DJI30", Direction::Buy),
    ];
    let report = analyze_exposure(&active);
    // Pairs: 0.90, 0.85, unknown -> (0.90 + 0.85 + 0.0) / 3
    assert!((report.average_correlation - 0.583_333).abs() < 1e-3);
}

#[test]
fn group_counts_track_membership() {
    let active = vec![
        exposure("XAUUSD", Direction::Buy),
        exposure("XAGUSD", Direction::Buy),
    ];
    let report = analyze_exposure(&active);
    assert_eq!(report.by_group.get("commodities"), Some(&2));
    assert_eq!(report.by_group.get("risk-on"), Some(&0));
}
