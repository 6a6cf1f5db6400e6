//! Simulated trade levels
//!
//! No orders are ever placed; these levels only enrich notifications so a
//! reader can judge the signal. Base distances follow the backtested S/R
//! strategy, then get scaled by session and volatility multipliers.

use crate::indicators::volatility::VolatilityLevel;
use crate::models::signal::Direction;
use crate::signals::sessions::SessionAdjustment;
use serde::{Deserialize, Serialize};

/// Base stop-loss distance as a fraction of entry price.
pub const BASE_STOP_LOSS_RATIO: f64 = 0.0025;

/// Second take-profit sits this much beyond the first.
const SECOND_TARGET_STRETCH: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit_1: f64,
    pub take_profit_2: f64,
}

/// Plan simulated levels for an actionable verdict. None for non-signals.
pub fn plan_trade(
    direction: Direction,
    price: f64,
    volatility: VolatilityLevel,
    session: SessionAdjustment,
) -> Option<TradePlan> {
    if price <= 0.0 {
        return None;
    }

    let sl_distance =
        price * BASE_STOP_LOSS_RATIO * volatility.stop_loss_multiplier() * session.sl_multiplier;
    let tp_distance = sl_distance * session.tp_multiplier * volatility.take_profit_multiplier();

    let (stop_loss, take_profit_1, take_profit_2) = match direction {
        Direction::Buy => (
            price - sl_distance,
            price + tp_distance,
            price + tp_distance * SECOND_TARGET_STRETCH,
        ),
        Direction::Sell => (
            price + sl_distance,
            price - tp_distance,
            price - tp_distance * SECOND_TARGET_STRETCH,
        ),
        Direction::None => return None,
    };

    Some(TradePlan {
        entry: price,
        stop_loss,
        take_profit_1,
        take_profit_2,
    })
}
