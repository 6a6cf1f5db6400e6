use chrono::{DateTime, Duration, Utc};
use sentrix::signals::news::{
    event_by_code, NewsFeed, NewsImpact, NewsRelease, NewsScanner, ReleaseSurprise,
    SimulatedNewsFeed,
};

struct FixedFeed(Vec<NewsRelease>);

impl NewsFeed for FixedFeed {
    fn recent_releases(&self, _now: DateTime<Utc>) -> Vec<NewsRelease> {
        self.0.clone()
    }
}

fn release(code: &str, minutes_ago: i64, now: DateTime<Utc>) -> NewsRelease {
    NewsRelease {
        code: code.to_string(),
        actual: 0.4,
        expected: 0.2,
        released_at: now - Duration::minutes(minutes_ago),
    }
}

#[test]
fn only_recent_releases_alert() {
    let now = Utc::now();
    let feed = FixedFeed(vec![
        release("CPI_MONTHLY", 5, now),
        release("NFP", 120, now),
    ]);
    let mut scanner = NewsScanner::default();
    let alerts = scanner.scan(&feed, now);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].code, "CPI_MONTHLY");
    assert_eq!(alerts[0].impact, NewsImpact::High);
    assert_eq!(alerts[0].surprise, ReleaseSurprise::AboveExpected);
}

#[test]
fn releases_are_alerted_once() {
    let now = Utc::now();
    let feed = FixedFeed(vec![release("CPI_MONTHLY", 5, now)]);
    let mut scanner = NewsScanner::default();

    assert_eq!(scanner.scan(&feed, now).len(), 1);
    assert!(scanner.scan(&feed, now).is_empty());
}

#[test]
fn unknown_event_codes_are_ignored() {
    let now = Utc::now();
    let feed = FixedFeed(vec![release("MYSTERY_EVENT", 5, now)]);
    let mut scanner = NewsScanner::default();
    assert!(scanner.scan(&feed, now).is_empty());
}

#[test]
fn affected_symbols_come_from_the_calendar() {
    let now = Utc::now();
    let feed = FixedFeed(vec![release("NFP", 5, now)]);
    let mut scanner = NewsScanner::default();
    let alerts = scanner.scan(&feed, now);
    assert!(alerts[0].affected.iter().any(|s| s == "EURUSD"));
    assert!(alerts[0].affected.iter().any(|s| s == "XAUUSD"));
}

#[test]
fn surprise_direction_tracks_actual_vs_expected() {
    let now = Utc::now();
    let below = NewsRelease {
        code: "PMI".to_string(),
        actual: 48.0,
        expected: 52.0,
        released_at: now,
    };
    assert_eq!(below.surprise(), ReleaseSurprise::BelowExpected);

    let in_line = NewsRelease {
        code: "PMI".to_string(),
        actual: 52.0,
        expected: 52.0,
        released_at: now,
    };
    assert_eq!(in_line.surprise(), ReleaseSurprise::InLine);
}

#[test]
fn simulated_feed_produces_one_recent_alert() {
    let now = Utc::now();
    let mut scanner = NewsScanner::default();
    let alerts = scanner.scan(&SimulatedNewsFeed, now);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].code, "CPI_MONTHLY");
}

#[test]
fn calendar_lookup_finds_very_high_impact_events() {
    let event = event_by_code("FED_RATE_DECISION").unwrap();
    assert_eq!(event.impact, NewsImpact::VeryHigh);
    assert!(event.affected.contains(&"XAUUSD"));
}
