//! Price position against the Bollinger channel and the moving averages.

use crate::indicators::registry::{Analyzer, AnalyzerOutput};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::SignalTag;
use crate::signals::weights::PatternWeights;

pub const NEAR_UPPER_BAND: f64 = 0.8;
pub const NEAR_LOWER_BAND: f64 = 0.2;

/// Last traded price against the Bollinger channel, EMA20 and SMA50.
///
/// Always emits one EMA tag and one SMA tag; a price equal to the average
/// counts as below it.
pub struct PricePositionAnalyzer;

impl Analyzer for PricePositionAnalyzer {
    fn name(&self) -> &'static str {
        "price_position"
    }

    fn analyze(&self, s: &IndicatorSnapshot, _weights: &PatternWeights) -> AnalyzerOutput {
        let mut out = AnalyzerOutput::new();
        let ltp = s.ltp;

        let band_position = s.bollinger.position_of(ltp);
        if band_position > NEAR_UPPER_BAND {
            out.push(SignalTag::NearBbUpper, -0.5);
        } else if band_position < NEAR_LOWER_BAND {
            out.push(SignalTag::NearBbLower, 0.5);
        }

        if ltp > s.ema20.value {
            out.push(SignalTag::AboveEma, 0.3);
        } else {
            out.push(SignalTag::BelowEma, -0.3);
        }

        if ltp > s.sma50.value {
            out.push(SignalTag::AboveSma, 0.3);
        } else {
            out.push(SignalTag::BelowSma, -0.3);
        }

        out
    }
}
