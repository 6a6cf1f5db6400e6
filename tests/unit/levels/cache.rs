use sentrix::levels::cache::LevelCache;
use sentrix::models::levels::LevelSet;
use std::time::Duration;

fn sample_levels() -> LevelSet {
    LevelSet::new(vec![1.0820, 1.0780], vec![1.0920, 1.0950])
}

#[test]
fn fresh_entries_are_returned() {
    let cache = LevelCache::new(Duration::from_secs(60));
    cache.insert("EURUSD", sample_levels());
    assert_eq!(cache.get("EURUSD"), Some(sample_levels()));
}

#[test]
fn missing_symbols_miss() {
    let cache = LevelCache::new(Duration::from_secs(60));
    assert!(cache.get("EURUSD").is_none());
}

#[test]
fn zero_ttl_entries_are_always_stale() {
    let cache = LevelCache::new(Duration::from_secs(0));
    cache.insert("EURUSD", sample_levels());
    assert!(cache.get("EURUSD").is_none());
}

#[test]
fn reinsert_overwrites() {
    let cache = LevelCache::new(Duration::from_secs(60));
    cache.insert("EURUSD", sample_levels());
    let updated = LevelSet::new(vec![1.0800], vec![1.0900]);
    cache.insert("EURUSD", updated.clone());
    assert_eq!(cache.get("EURUSD"), Some(updated));
}
