//! Market session windows
//!
//! Session hours are UTC. London and New York overlap 13:00-16:00; lookup
//! order resolves the overlap in favor of the earlier session.

use crate::indicators::volatility::VolatilityLevel;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSession {
    Asia,
    London,
    NewYork,
}

impl MarketSession {
    pub fn label(&self) -> &'static str {
        match self {
            MarketSession::Asia => "Asia",
            MarketSession::London => "London",
            MarketSession::NewYork => "New York",
        }
    }
}

struct SessionWindow {
    session: MarketSession,
    start_hour: u32,
    end_hour: u32,
    focus: &'static [&'static str],
}

const SESSIONS: [SessionWindow; 3] = [
    SessionWindow {
        session: MarketSession::Asia,
        start_hour: 0,
        end_hour: 8,
        focus: &["USDJPY", "AUDUSD", "NZDUSD", "XAUUSD"],
    },
    SessionWindow {
        session: MarketSession::London,
        start_hour: 8,
        end_hour: 16,
        focus: &["EURUSD", "GBPUSD", "EURCHF", "XAGUSD"],
    },
    SessionWindow {
        session: MarketSession::NewYork,
        start_hour: 13,
        end_hour: 21,
        focus: &["USDCAD", "USDCHF", "SPX500", "NAS100"],
    },
];

/// Session active at the given UTC hour, or None outside all windows.
pub fn session_at_hour(hour: u32) -> Option<MarketSession> {
    SESSIONS
        .iter()
        .find(|w| w.start_hour <= hour && hour < w.end_hour)
        .map(|w| w.session)
}

pub fn current_session(now: DateTime<Utc>) -> Option<MarketSession> {
    session_at_hour(now.hour())
}

/// Instruments in focus for a session. Outside all sessions every focus
/// instrument is fair game.
pub fn recommended_instruments(session: Option<MarketSession>) -> Vec<&'static str> {
    match session {
        Some(session) => SESSIONS
            .iter()
            .find(|w| w.session == session)
            .map(|w| w.focus.to_vec())
            .unwrap_or_default(),
        None => {
            let mut all: Vec<&'static str> = SESSIONS.iter().flat_map(|w| w.focus).copied().collect();
            all.sort_unstable();
            all.dedup();
            all
        }
    }
}

/// Per-session strategy adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionAdjustment {
    pub volatility: VolatilityLevel,
    pub tp_multiplier: f64,
    pub sl_multiplier: f64,
}

pub fn session_adjustment(session: Option<MarketSession>) -> SessionAdjustment {
    match session {
        Some(MarketSession::Asia) => SessionAdjustment {
            volatility: VolatilityLevel::Medium,
            tp_multiplier: 2.5,
            sl_multiplier: 1.2,
        },
        Some(MarketSession::London) => SessionAdjustment {
            volatility: VolatilityLevel::High,
            tp_multiplier: 3.0,
            sl_multiplier: 1.0,
        },
        Some(MarketSession::NewYork) => SessionAdjustment {
            volatility: VolatilityLevel::High,
            tp_multiplier: 3.5,
            sl_multiplier: 0.8,
        },
        None => SessionAdjustment {
            volatility: VolatilityLevel::Low,
            tp_multiplier: 2.0,
            sl_multiplier: 1.5,
        },
    }
}

pub fn is_prime_time(now: DateTime<Utc>) -> bool {
    current_session(now).is_some()
}

/// Whether a signal for `symbol` should go out during `session`.
///
/// Outside all sessions everything is allowed; during a session, instruments
/// claimed by some session's focus list must be in the active one.
/// Instruments no session claims are always allowed.
pub fn session_allows(session: Option<MarketSession>, symbol: &str) -> bool {
    let Some(session) = session else {
        return true;
    };
    let claimed = SESSIONS.iter().any(|w| w.focus.contains(&symbol));
    if !claimed {
        return true;
    }
    recommended_instruments(Some(session)).contains(&symbol)
}

/// Next session to open after `now`, with the hours until it starts.
pub fn next_session(now: DateTime<Utc>) -> (MarketSession, i64) {
    let hour = now.hour() as i64;
    for window in &SESSIONS {
        if hour < window.start_hour as i64 {
            return (window.session, window.start_hour as i64 - hour);
        }
    }
    let first = &SESSIONS[0];
    (first.session, 24 - hour + first.start_hour as i64)
}
