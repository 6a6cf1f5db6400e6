//! Environment-based configuration
//!
//! All tunables the spec treats as configuration live here with one
//! consistent default set; env vars override the operational knobs.

use crate::levels::detector::DetectorConfig;
use crate::signals::classifier::ProximityConfig;
use crate::signals::movement::MovementThresholds;
use std::env;

/// Instruments scanned when INSTRUMENTS is not set.
pub const DEFAULT_INSTRUMENTS: [&str; 8] = [
    "EURUSD", "USDCAD", "EURCHF", "EURAUD", "XAUUSD", "XAGUSD", "OILUSD", "XPTUSD",
];

/// History window used for level detection.
pub const SR_RANGE: &str = "3mo";
pub const SR_INTERVAL: &str = "4h";

/// History window used for trend/RSI computation.
pub const INDICATOR_RANGE: &str = "1mo";
pub const INDICATOR_INTERVAL: &str = "1h";

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Algorithmic tuning knobs, grouped for injection into the components.
#[derive(Debug, Clone, Default)]
pub struct ScanTuning {
    pub detector: DetectorConfig,
    pub proximity: ProximityConfig,
    pub movement: MovementThresholds,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub scan_interval_seconds: u64,
    /// Pause between instruments inside one cycle (third-party rate limits).
    pub pause_between_instruments_ms: u64,
    pub level_cache_ttl_seconds: u64,
    pub instruments: Vec<String>,
    pub port: u16,
    pub tuning: ScanTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram_token: None,
            telegram_chat_id: None,
            scan_interval_seconds: 120,
            pause_between_instruments_ms: 2_000,
            level_cache_ttl_seconds: 120,
            instruments: DEFAULT_INSTRUMENTS.iter().map(|s| s.to_string()).collect(),
            port: 8080,
            tuning: ScanTuning::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        let instruments = env::var("INSTRUMENTS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.instruments);

        Self {
            telegram_token: env::var("TELEGRAM_TOKEN").ok().filter(|t| !t.is_empty()),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok().filter(|c| !c.is_empty()),
            scan_interval_seconds: parse_env("SCAN_INTERVAL_SECONDS", defaults.scan_interval_seconds),
            pause_between_instruments_ms: parse_env(
                "PAUSE_BETWEEN_INSTRUMENTS_MS",
                defaults.pause_between_instruments_ms,
            ),
            level_cache_ttl_seconds: parse_env(
                "LEVEL_CACHE_TTL_SECONDS",
                defaults.level_cache_ttl_seconds,
            ),
            instruments,
            port: parse_env("PORT", defaults.port),
            tuning: ScanTuning::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
