//! Priority-ordered decision rules.
//!
//! A flat decision tree evaluated top to bottom; the first matching rule wins and
//! nothing carries over between calls.

use crate::config::EngineConfig;
use crate::models::indicators::{AroonStatus, IndicatorSnapshot, TrendStatus};
use crate::models::signal::{Decision, SignalTag, TradeSignal};
use crate::signals::categories::tally;
use crate::signals::scoring::{base_confidence, boosted};

/// Strength beyond which a setup is treated as strong (with enough confirmations).
pub const STRONG_STRENGTH: f64 = 1.5;
/// Strength beyond which a setup is treated as moderate.
pub const MODERATE_STRENGTH: f64 = 1.0;
/// Directional tags needed to confirm a strong setup.
pub const MIN_CONFIRMATIONS: usize = 3;
/// Confidence floor for moderate setups.
pub const MODERATE_CONFIDENCE_FLOOR: f64 = 0.65;

pub const TREND_BONUS: f64 = 0.2;
pub const TREND_BONUS_CAP: f64 = 0.95;
pub const AROON_BONUS: f64 = 0.1;
pub const AROON_BONUS_CAP: f64 = 0.85;

/// RSI bounds under which the SuperTrend / Aroon confirmations apply.
pub const BULLISH_TREND_RSI_MAX: f64 = 60.0;
pub const BULLISH_AROON_RSI_MAX: f64 = 65.0;
pub const BEARISH_TREND_RSI_MIN: f64 = 40.0;
pub const BEARISH_AROON_RSI_MIN: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionEngine {
    volatility_gate_vix: f64,
    max_confidence: f64,
}

impl DecisionEngine {
    pub fn new(volatility_gate_vix: f64, max_confidence: f64) -> Self {
        Self {
            volatility_gate_vix,
            max_confidence,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.volatility_gate_vix, config.max_confidence)
    }

    pub fn volatility_gate_vix(&self) -> f64 {
        self.volatility_gate_vix
    }

    /// Turn aggregated tags and strength into a signal and confidence.
    ///
    /// `HOLD` always carries a confidence of exactly 0.0 and every other
    /// confidence is clamped to `max_confidence`.
    pub fn decide(&self, tags: &[SignalTag], strength: f64, snapshot: &IndicatorSnapshot) -> Decision {
        if snapshot.vix.value > self.volatility_gate_vix {
            return Decision::hold();
        }

        let counts = tally(tags);
        let base = base_confidence(strength);
        let rsi = snapshot.rsi.value;

        let decision = if strength > STRONG_STRENGTH && counts.bullish >= MIN_CONFIRMATIONS {
            let confidence = if snapshot.supertrend == TrendStatus::Bullish
                && rsi < BULLISH_TREND_RSI_MAX
            {
                boosted(base, TREND_BONUS, TREND_BONUS_CAP)
            } else if snapshot.aroon == AroonStatus::Uptrend && rsi < BULLISH_AROON_RSI_MAX {
                boosted(base, AROON_BONUS, AROON_BONUS_CAP)
            } else {
                base
            };
            Decision::new(TradeSignal::BuyCe, confidence)
        } else if strength < -STRONG_STRENGTH && counts.bearish >= MIN_CONFIRMATIONS {
            let confidence = if snapshot.supertrend == TrendStatus::Bearish
                && rsi > BEARISH_TREND_RSI_MIN
            {
                boosted(base, TREND_BONUS, TREND_BONUS_CAP)
            } else if snapshot.aroon == AroonStatus::Downtrend && rsi > BEARISH_AROON_RSI_MIN {
                boosted(base, AROON_BONUS, AROON_BONUS_CAP)
            } else {
                base
            };
            Decision::new(TradeSignal::BuyPe, confidence)
        } else if strength.abs() > MODERATE_STRENGTH {
            if strength > 0.0 && counts.bullish > counts.bearish {
                Decision::new(TradeSignal::BuyCe, base.max(MODERATE_CONFIDENCE_FLOOR))
            } else if strength < 0.0 && counts.bearish > counts.bullish {
                Decision::new(TradeSignal::BuyPe, base.max(MODERATE_CONFIDENCE_FLOOR))
            } else {
                Decision::hold()
            }
        } else {
            Decision::hold()
        };

        self.clamp(decision)
    }

    fn clamp(&self, decision: Decision) -> Decision {
        match decision.signal {
            TradeSignal::Hold => Decision::hold(),
            signal => Decision::new(signal, decision.confidence.min(self.max_confidence).max(0.0)),
        }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
