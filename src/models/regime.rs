//! Descriptive market labels attached to reports. They never feed the decision.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VixCondition {
    ExtremeVolatility,
    HighVolatility,
    LowVolatility,
    NormalVolatility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketRegime {
    HighVolatility,
    LowVolatility,
    BullishTrend,
    BearishTrend,
    SidewaysRanging,
    SidewaysMarket,
}
