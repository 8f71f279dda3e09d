//! Volume spike and volume strength score.

use crate::indicators::registry::{Analyzer, AnalyzerOutput};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::SignalTag;
use crate::signals::weights::PatternWeights;

/// Volume strength scores beyond ±0.5 count as weak / strong volume.
pub const VOLUME_SCORE_BAND: f64 = 0.5;

/// Volume spikes and the signed volume strength score.
pub struct VolumePatternAnalyzer;

impl Analyzer for VolumePatternAnalyzer {
    fn name(&self) -> &'static str {
        "volume_pattern"
    }

    fn analyze(&self, s: &IndicatorSnapshot, w: &PatternWeights) -> AnalyzerOutput {
        let mut out = AnalyzerOutput::new();

        if s.volume_spike {
            out.push(SignalTag::VolumeSpike, 0.6);
        }

        let score = s.volume_strength.score;
        if score < -VOLUME_SCORE_BAND {
            out.push(SignalTag::VolumeStrengthWeak, w.volume_strength_weak);
        } else if score > VOLUME_SCORE_BAND {
            out.push(SignalTag::VolumeStrengthStrong, 0.5);
        }

        out
    }
}
