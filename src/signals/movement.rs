//! Percentage-movement breakout detection
//!
//! Keeps a rolling price history per instrument and raises an alert when the
//! move over a tracked window crosses the instrument's class threshold.
//! Windows assume the ~5 minute scan cadence: 12 samples ≈ 1 h, 48 ≈ 4 h,
//! the whole buffer ≈ the last day.

use crate::models::market::{AssetClass, PriceSample};
use crate::models::signal::{MoveMagnitude, MovementAlert, MovementWindow};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// Samples older than this are pruned.
pub const RETENTION_HOURS: i64 = 48;

/// Hard cap on buffered samples per instrument.
pub const MAX_SAMPLES: usize = 100;

const ONE_HOUR_SPAN: usize = 12;
const FOUR_HOUR_SPAN: usize = 48;
const DAY_MIN_SAMPLES: usize = 10;

/// Notified-alert ids kept before trimming the oldest half away.
const NOTIFIED_CAP: usize = 100;

/// Rolling window of recent price samples for one instrument.
///
/// Timestamps are strictly non-decreasing: out-of-order samples are dropped.
#[derive(Debug, Default)]
pub struct PriceHistoryBuffer {
    samples: VecDeque<PriceSample>,
}

impl PriceHistoryBuffer {
    pub fn push(&mut self, sample: PriceSample) -> bool {
        if let Some(last) = self.samples.back() {
            if sample.timestamp < last.timestamp {
                return false;
            }
        }
        self.samples.push_back(sample);
        self.prune(sample.timestamp);
        true
    }

    fn prune(&mut self, newest: DateTime<Utc>) {
        let cutoff = newest - Duration::hours(RETENTION_HOURS);
        while let Some(front) = self.samples.front() {
            if front.timestamp > cutoff && self.samples.len() <= MAX_SAMPLES {
                break;
            }
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price).collect()
    }
}

/// Movement thresholds per asset class, as fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementThresholds {
    pub forex: f64,
    pub commodities: f64,
    pub indices: f64,
    pub crypto: f64,
}

impl Default for MovementThresholds {
    fn default() -> Self {
        Self {
            forex: 0.003,
            commodities: 0.005,
            indices: 0.008,
            crypto: 0.020,
        }
    }
}

impl MovementThresholds {
    pub fn threshold_for(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Forex => self.forex,
            AssetClass::Metals | AssetClass::Energy => self.commodities,
            AssetClass::Index => self.indices,
            AssetClass::Crypto => self.crypto,
        }
    }
}

pub struct MovementDetector {
    thresholds: MovementThresholds,
    buffers: HashMap<String, PriceHistoryBuffer>,
    notified: HashSet<String>,
    notified_order: VecDeque<String>,
}

impl MovementDetector {
    pub fn new(thresholds: MovementThresholds) -> Self {
        Self {
            thresholds,
            buffers: HashMap::new(),
            notified: HashSet::new(),
            notified_order: VecDeque::new(),
        }
    }

    /// Record a fresh quote and return any newly triggered movement alerts.
    pub fn record(
        &mut self,
        symbol: &str,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Vec<MovementAlert> {
        let buffer = self.buffers.entry(symbol.to_string()).or_default();
        buffer.push(PriceSample { price, timestamp });

        let prices = buffer.prices();
        if prices.len() < 5 {
            return Vec::new();
        }

        let class = AssetClass::of(symbol);
        let threshold = self.thresholds.threshold_for(class);

        let mut alerts = Vec::new();
        for (window, span) in [
            (MovementWindow::OneHour, Some(ONE_HOUR_SPAN)),
            (MovementWindow::FourHours, Some(FOUR_HOUR_SPAN)),
            (MovementWindow::Day, None),
        ] {
            let start_idx = match span {
                Some(span) if prices.len() >= span => prices.len() - span,
                Some(_) => continue,
                None if prices.len() >= DAY_MIN_SAMPLES => 0,
                None => continue,
            };

            let start = prices[start_idx];
            let end = prices[prices.len() - 1];
            if start == 0.0 {
                continue;
            }
            let change = (end - start) / start;
            if change.abs() < threshold {
                continue;
            }

            let alert = self.build_alert(symbol, class, window, start, end, change, threshold, timestamp);
            if self.mark_notified(&alert.id) {
                alerts.push(alert);
            }
        }

        alerts
    }

    fn build_alert(
        &self,
        symbol: &str,
        class: AssetClass,
        window: MovementWindow,
        start: f64,
        end: f64,
        change: f64,
        threshold: f64,
        timestamp: DateTime<Utc>,
    ) -> MovementAlert {
        let magnitude = if change.abs() >= threshold * 3.0 {
            MoveMagnitude::VeryStrong
        } else if change.abs() >= threshold * 2.0 {
            MoveMagnitude::Strong
        } else {
            MoveMagnitude::Moderate
        };

        let direction = if change > 0.0 { "up" } else { "down" };
        MovementAlert {
            id: format!(
                "{}_{}_{}_{:.2}",
                symbol,
                window.label(),
                direction,
                change.abs() * 100.0
            ),
            symbol: symbol.to_string(),
            asset_class: class,
            window,
            change_pct: change * 100.0,
            change_abs: end - start,
            start_price: start,
            end_price: end,
            magnitude,
            timestamp,
        }
    }

    /// True when this alert id has not been notified yet.
    fn mark_notified(&mut self, id: &str) -> bool {
        if self.notified.contains(id) {
            return false;
        }
        self.notified.insert(id.to_string());
        self.notified_order.push_back(id.to_string());

        while self.notified_order.len() > NOTIFIED_CAP {
            // Trim the oldest half so the set does not grow without bound.
            for _ in 0..NOTIFIED_CAP / 2 {
                if let Some(old) = self.notified_order.pop_front() {
                    self.notified.remove(&old);
                }
            }
        }
        true
    }

    pub fn buffer(&self, symbol: &str) -> Option<&PriceHistoryBuffer> {
        self.buffers.get(symbol)
    }
}

impl Default for MovementDetector {
    fn default() -> Self {
        Self::new(MovementThresholds::default())
    }
}
