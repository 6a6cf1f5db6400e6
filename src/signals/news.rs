//! Economic-news alerts
//!
//! A shipped calendar of high-impact events plus a feed of recent releases.
//! Only releases inside a short recency window raise alerts, and each
//! release is alerted once.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsImpact {
    Medium,
    High,
    VeryHigh,
}

/// One calendar entry for a recurring economic release.
#[derive(Debug, Clone, Copy)]
pub struct EconomicEvent {
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub impact: NewsImpact,
    pub affected: &'static [&'static str],
}

pub const CALENDAR: &[EconomicEvent] = &[
    EconomicEvent {
        code: "CPI_MONTHLY",
        name: "Monthly CPI (inflation)",
        country: "US",
        impact: NewsImpact::High,
        affected: &["EURUSD", "GBPUSD", "XAUUSD", "SPX500", "NAS100"],
    },
    EconomicEvent {
        code: "UNEMPLOYMENT_RATE",
        name: "Unemployment rate",
        country: "US",
        impact: NewsImpact::High,
        affected: &["EURUSD", "GBPUSD", "XAUUSD", "SPX500"],
    },
    EconomicEvent {
        code: "FED_RATE_DECISION",
        name: "Fed rate decision",
        country: "US",
        impact: NewsImpact::VeryHigh,
        affected: &["EURUSD", "GBPUSD", "XAUUSD", "SPX500", "DJI30"],
    },
    EconomicEvent {
        code: "NFP",
        name: "Non-farm payrolls",
        country: "US",
        impact: NewsImpact::VeryHigh,
        affected: &["EURUSD", "GBPUSD", "XAUUSD", "SPX500", "USDJPY"],
    },
    EconomicEvent {
        code: "PMI",
        name: "Manufacturing PMI",
        country: "US",
        impact: NewsImpact::Medium,
        affected: &["EURUSD", "SPX500"],
    },
];

pub fn event_by_code(code: &str) -> Option<&'static EconomicEvent> {
    CALENDAR.iter().find(|e| e.code == code)
}

/// One published figure for a calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRelease {
    pub code: String,
    pub actual: f64,
    pub expected: f64,
    pub released_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseSurprise {
    AboveExpected,
    BelowExpected,
    InLine,
}

impl NewsRelease {
    pub fn surprise(&self) -> ReleaseSurprise {
        if self.actual > self.expected {
            ReleaseSurprise::AboveExpected
        } else if self.actual < self.expected {
            ReleaseSurprise::BelowExpected
        } else {
            ReleaseSurprise::InLine
        }
    }
}

/// Source of recent economic releases.
pub trait NewsFeed {
    fn recent_releases(&self, now: DateTime<Utc>) -> Vec<NewsRelease>;
}

/// Canned feed standing in for a real economic-data API.
pub struct SimulatedNewsFeed;

impl NewsFeed for SimulatedNewsFeed {
    fn recent_releases(&self, now: DateTime<Utc>) -> Vec<NewsRelease> {
        vec![
            NewsRelease {
                code: "CPI_MONTHLY".to_string(),
                actual: 0.4,
                expected: 0.2,
                released_at: now - Duration::minutes(5),
            },
            NewsRelease {
                code: "NFP".to_string(),
                actual: 250.0,
                expected: 180.0,
                released_at: now - Duration::hours(2),
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsAlert {
    pub code: String,
    pub name: String,
    pub country: String,
    pub impact: NewsImpact,
    pub surprise: ReleaseSurprise,
    pub affected: Vec<String>,
    pub released_at: DateTime<Utc>,
}

pub struct NewsScanner {
    recency: Duration,
    seen: HashSet<String>,
}

impl NewsScanner {
    pub fn new(recency: Duration) -> Self {
        Self {
            recency,
            seen: HashSet::new(),
        }
    }

    /// Alerts for calendar events released within the recency window that
    /// have not been alerted before.
    pub fn scan(&mut self, feed: &dyn NewsFeed, now: DateTime<Utc>) -> Vec<NewsAlert> {
        let mut alerts = Vec::new();
        for release in feed.recent_releases(now) {
            if now - release.released_at > self.recency {
                continue;
            }
            let Some(event) = event_by_code(&release.code) else {
                continue;
            };
            let key = format!("{}_{}", release.code, release.released_at.timestamp());
            if !self.seen.insert(key) {
                continue;
            }
            alerts.push(NewsAlert {
                code: event.code.to_string(),
                name: event.name.to_string(),
                country: event.country.to_string(),
                impact: event.impact,
                surprise: release.surprise(),
                affected: event.affected.iter().map(|s| s.to_string()).collect(),
                released_at: release.released_at,
            });
        }
        alerts
    }
}

impl Default for NewsScanner {
    fn default() -> Self {
        Self::new(Duration::minutes(30))
    }
}
