use sentrix::indicators::momentum::rsi::{rsi, rsi_default, DEFAULT_PERIOD};

#[test]
fn too_short_series_yields_none() {
    let closes: Vec<f64> = (0..DEFAULT_PERIOD).map(|i| i as f64).collect();
    assert!(rsi_default(&closes).is_none());
}

#[test]
fn all_gains_saturate_at_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let value = rsi_default(&closes).unwrap();
    assert_eq!(value, 100.0);
}

#[test]
fn all_losses_read_deeply_oversold() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let value = rsi_default(&closes).unwrap();
    assert!(value < 1.0);
}

#[test]
fn known_small_series_value() {
    // Changes: +1.0 then -0.5; avg gain 0.5, avg loss 0.25, RS = 2
    let value = rsi(&[1.0, 2.0, 1.5], 2).unwrap();
    assert!((value - 66.666_666).abs() < 1e-3);
}

#[test]
fn value_stays_in_bounds() {
    let closes: Vec<f64> = (0..50)
        .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 0.8)
        .collect();
    let value = rsi_default(&closes).unwrap();
    assert!((0.0..=100.0).contains(&value));
}

#[test]
fn zero_period_yields_none() {
    assert!(rsi(&[1.0, 2.0, 3.0], 0).is_none());
}
