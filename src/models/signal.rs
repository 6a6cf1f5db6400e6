//! Signal output types

use crate::models::market::AssetClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Whichever of support/resistance is currently nearer to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Support,
    Resistance,
    Neutral,
}

/// Outcome of one classification pass. Constructed fresh per evaluation and
/// consumed immediately by the orchestrator; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalVerdict {
    pub symbol: String,
    pub direction: Direction,
    pub confidence: Confidence,
    pub zone: Zone,
    pub rationale: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_support_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_resistance_distance: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl SignalVerdict {
    pub fn is_actionable(&self) -> bool {
        self.direction != Direction::None
    }
}

/// Time window over which a percentage movement was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementWindow {
    OneHour,
    FourHours,
    Day,
}

impl MovementWindow {
    pub fn label(&self) -> &'static str {
        match self {
            MovementWindow::OneHour => "1h",
            MovementWindow::FourHours => "4h",
            MovementWindow::Day => "24h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveMagnitude {
    Moderate,
    Strong,
    VeryStrong,
}

/// Alert emitted when an instrument moves more than its class threshold
/// within one of the tracked windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementAlert {
    /// Stable id used to suppress duplicate notifications.
    pub id: String,
    pub symbol: String,
    pub asset_class: AssetClass,
    pub window: MovementWindow,
    /// Signed move over the window, in percent.
    pub change_pct: f64,
    pub change_abs: f64,
    pub start_price: f64,
    pub end_price: f64,
    pub magnitude: MoveMagnitude,
    pub timestamp: DateTime<Utc>,
}
