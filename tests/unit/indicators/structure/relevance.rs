use sentrix::indicators::structure::relevance::{
    filter_relevant, DEFAULT_MAX_RELATIVE_DISTANCE, MAX_LEVELS_PER_SIDE,
};
use sentrix::models::levels::LevelKind;

#[test]
fn supports_are_strictly_below_the_reference_price() {
    let levels = [0.96, 0.99, 1.0, 1.01, 1.04];
    let supports = filter_relevant(&levels, 1.0, LevelKind::Support, DEFAULT_MAX_RELATIVE_DISTANCE);
    assert!(!supports.is_empty());
    assert!(supports.iter().all(|s| *s < 1.0));
}

#[test]
fn resistances_are_strictly_above_the_reference_price() {
    let levels = [0.96, 0.99, 1.0, 1.01, 1.04];
    let resistances =
        filter_relevant(&levels, 1.0, LevelKind::Resistance, DEFAULT_MAX_RELATIVE_DISTANCE);
    assert!(!resistances.is_empty());
    assert!(resistances.iter().all(|r| *r > 1.0));
}

#[test]
fn supports_come_back_nearest_first() {
    let levels = [0.96, 0.97, 0.98, 0.99];
    let supports = filter_relevant(&levels, 1.0, LevelKind::Support, DEFAULT_MAX_RELATIVE_DISTANCE);
    assert_eq!(supports, vec![0.99, 0.98, 0.97]);
}

#[test]
fn resistances_come_back_nearest_first() {
    let levels = [1.04, 1.01, 1.03, 1.02];
    let resistances =
        filter_relevant(&levels, 1.0, LevelKind::Resistance, DEFAULT_MAX_RELATIVE_DISTANCE);
    assert_eq!(resistances, vec![1.01, 1.02, 1.03]);
}

#[test]
fn output_never_exceeds_the_per_side_cap() {
    let levels: Vec<f64> = (1..40).map(|i| 1.0 - i as f64 * 0.001).collect();
    let supports = filter_relevant(&levels, 1.0, LevelKind::Support, DEFAULT_MAX_RELATIVE_DISTANCE);
    assert!(supports.len() <= MAX_LEVELS_PER_SIDE);
}

#[test]
fn distant_levels_are_dropped() {
    // 10% away, beyond the 5% default
    let supports = filter_relevant(&[0.90], 1.0, LevelKind::Support, DEFAULT_MAX_RELATIVE_DISTANCE);
    assert!(supports.is_empty());
}

#[test]
fn non_positive_reference_yields_nothing() {
    let levels = [0.9, 1.1];
    assert!(filter_relevant(&levels, 0.0, LevelKind::Support, 0.05).is_empty());
    assert!(filter_relevant(&levels, -1.0, LevelKind::Resistance, 0.05).is_empty());
}
