use sentrix::indicators::volatility::VolatilityLevel;
use sentrix::signals::sessions::{
    next_session, recommended_instruments, session_adjustment, session_allows, session_at_hour,
    MarketSession,
};

#[test]
fn hours_map_to_their_sessions() {
    assert_eq!(session_at_hour(3), Some(MarketSession::Asia));
    assert_eq!(session_at_hour(9), Some(MarketSession::London));
    assert_eq!(session_at_hour(18), Some(MarketSession::NewYork));
    assert_eq!(session_at_hour(22), None);
}

#[test]
fn london_new_york_overlap_resolves_to_london() {
    assert_eq!(session_at_hour(14), Some(MarketSession::London));
}

#[test]
fn session_boundaries_are_half_open() {
    assert_eq!(session_at_hour(0), Some(MarketSession::Asia));
    assert_eq!(session_at_hour(8), Some(MarketSession::London));
    assert_eq!(session_at_hour(21), None);
}

#[test]
fn each_session_recommends_its_focus_instruments() {
    let london = recommended_instruments(Some(MarketSession::London));
    assert!(london.contains(&"EURUSD"));
    assert!(!london.contains(&"USDCAD"));
}

#[test]
fn off_hours_recommends_everything_once() {
    let all = recommended_instruments(None);
    assert_eq!(all.len(), 12);
    assert!(all.contains(&"EURUSD"));
    assert!(all.contains(&"SPX500"));
}

#[test]
fn focus_instruments_are_gated_to_their_session() {
    assert!(session_allows(Some(MarketSession::London), "EURUSD"));
    assert!(!session_allows(Some(MarketSession::London), "USDCAD"));
    assert!(session_allows(Some(MarketSession::NewYork), "USDCAD"));
}

#[test]
fn unclaimed_instruments_are_always_allowed() {
    assert!(session_allows(Some(MarketSession::London), "EURAUD"));
    assert!(session_allows(Some(MarketSession::Asia), "OILUSD"));
}

#[test]
fn off_hours_allows_everything() {
    assert!(session_allows(None, "EURUSD"));
    assert!(session_allows(None, "USDCAD"));
}

#[test]
fn off_hours_adjustment_is_conservative() {
    let adj = session_adjustment(None);
    assert_eq!(adj.volatility, VolatilityLevel::Low);
    assert_eq!(adj.tp_multiplier, 2.0);
    assert_eq!(adj.sl_multiplier, 1.5);
}

#[test]
fn new_york_targets_are_the_most_aggressive() {
    let ny = session_adjustment(Some(MarketSession::NewYork));
    let asia = session_adjustment(Some(MarketSession::Asia));
    assert!(ny.tp_multiplier > asia.tp_multiplier);
    assert!(ny.sl_multiplier < asia.sl_multiplier);
}

#[test]
fn next_session_wraps_past_midnight() {
    use chrono::{TimeZone, Utc};
    let late = Utc.with_ymd_and_hms(2024, 3, 14, 22, 0, 0).unwrap();
    let (session, hours) = next_session(late);
    assert_eq!(session, MarketSession::Asia);
    assert_eq!(hours, 2);
}

#[test]
fn next_session_before_london_open() {
    use chrono::{TimeZone, Utc};
    let early = Utc.with_ymd_and_hms(2024, 3, 14, 6, 0, 0).unwrap();
    let (session, hours) = next_session(early);
    assert_eq!(session, MarketSession::London);
    assert_eq!(hours, 2);
}
