//! Second pass over CCI and MFI with fixed weights.
//!
//! Scores the same conditions as the composite analyzer but under different tag
//! names and magnitudes. For CCI the polarity is inverted relative to the
//! composite rule: a sell / below -100 reading is `CCI_OVERSOLD` and scores
//! positively here while `CCI_SELL` scores negatively there. Both are kept as-is.

use crate::indicators::composite::{CCI_BAND, MFI_OVERBOUGHT, MFI_OVERSOLD};
use crate::indicators::registry::{Analyzer, AnalyzerOutput};
use crate::models::indicators::{CciStatus, IndicatorSnapshot, MfiStatus};
use crate::models::signal::SignalTag;
use crate::signals::weights::PatternWeights;

pub struct OscillatorAnalyzer;

impl Analyzer for OscillatorAnalyzer {
    fn name(&self) -> &'static str {
        "oscillators"
    }

    fn analyze(&self, s: &IndicatorSnapshot, _weights: &PatternWeights) -> AnalyzerOutput {
        let mut out = AnalyzerOutput::new();

        if s.cci.status == CciStatus::Sell || s.cci.value < -CCI_BAND {
            out.push(SignalTag::CciOversold, 0.7);
        } else if s.cci.status == CciStatus::Buy || s.cci.value > CCI_BAND {
            out.push(SignalTag::CciOverbought, -0.7);
        }

        if s.mfi.status == MfiStatus::Oversold || s.mfi.value < MFI_OVERSOLD {
            out.push(SignalTag::MfiOversold, 0.8);
        } else if s.mfi.status == MfiStatus::Overbought || s.mfi.value > MFI_OVERBOUGHT {
            out.push(SignalTag::MfiOverbought, -0.8);
        }

        out
    }
}
