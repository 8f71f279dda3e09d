//! Descriptive VIX condition and market regime labels.
//!
//! Purely for reporting; the decision path has its own volatility gate.

use crate::config::{EngineConfig, RegimeThresholds, VixBands};
use crate::models::indicators::{IndicatorSnapshot, PriceActionType, TrendStatus};
use crate::models::regime::{MarketRegime, VixCondition};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegimeClassifier {
    bands: VixBands,
    regime: RegimeThresholds,
}

impl RegimeClassifier {
    pub fn new(bands: VixBands, regime: RegimeThresholds) -> Self {
        Self { bands, regime }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.vix_bands, config.regime)
    }

    pub fn vix_condition(&self, vix: f64) -> VixCondition {
        if vix > self.bands.extreme {
            VixCondition::ExtremeVolatility
        } else if vix > self.bands.high {
            VixCondition::HighVolatility
        } else if vix < self.bands.low {
            VixCondition::LowVolatility
        } else {
            VixCondition::NormalVolatility
        }
    }

    /// First matching branch wins: volatility extremes, then SuperTrend direction
    /// (qualified by RSI), then price action.
    pub fn market_regime(&self, snapshot: &IndicatorSnapshot) -> MarketRegime {
        let vix = snapshot.vix.value;
        let rsi = snapshot.rsi.value;
        let t = &self.regime;

        if vix > t.high_volatility_vix {
            MarketRegime::HighVolatility
        } else if vix < t.low_volatility_vix {
            MarketRegime::LowVolatility
        } else if snapshot.supertrend == TrendStatus::Bullish && rsi < t.bullish_rsi_ceiling {
            MarketRegime::BullishTrend
        } else if snapshot.supertrend == TrendStatus::Bearish && rsi > t.bearish_rsi_floor {
            MarketRegime::BearishTrend
        } else if snapshot.price_action == PriceActionType::Ranging {
            MarketRegime::SidewaysRanging
        } else {
            MarketRegime::SidewaysMarket
        }
    }
}
