//! ADX trend strength, Stochastic momentum and ATR volatility.

use crate::indicators::registry::{Analyzer, AnalyzerOutput};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::SignalTag;
use crate::signals::weights::PatternWeights;

pub const ADX_STRONG: f64 = 25.0;
pub const ADX_WEAK: f64 = 20.0;
pub const STOCHASTIC_OVERSOLD: f64 = 20.0;
pub const STOCHASTIC_OVERBOUGHT: f64 = 80.0;
pub const ATR_HIGH: f64 = 25.0;
pub const ATR_LOW: f64 = 15.0;

pub struct TrendStrengthAnalyzer;

impl Analyzer for TrendStrengthAnalyzer {
    fn name(&self) -> &'static str {
        "trend_strength"
    }

    fn analyze(&self, s: &IndicatorSnapshot, _weights: &PatternWeights) -> AnalyzerOutput {
        let mut out = AnalyzerOutput::new();

        if s.adx > ADX_STRONG {
            out.push(SignalTag::StrongTrend, 0.4);
        } else if s.adx < ADX_WEAK {
            out.push(SignalTag::WeakTrend, -0.2);
        }

        if s.stochastic < STOCHASTIC_OVERSOLD {
            out.push(SignalTag::StochasticOversold, 0.6);
        } else if s.stochastic > STOCHASTIC_OVERBOUGHT {
            out.push(SignalTag::StochasticOverbought, -0.6);
        }

        if s.atr > ATR_HIGH {
            out.push(SignalTag::HighVolatility, -0.3);
        } else if s.atr < ATR_LOW {
            out.push(SignalTag::LowVolatility, 0.2);
        }

        out
    }
}
