//! Combines analyzer outputs into one tag list and one strength value.

use crate::indicators::registry::AnalyzerOutput;
use crate::models::signal::SignalTag;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedSignals {
    pub tags: Vec<SignalTag>,
    pub strength: f64,
}

pub struct Aggregator;

impl Aggregator {
    /// Concatenate tags in analyzer order and sum the strength deltas.
    pub fn aggregate(outputs: &[AnalyzerOutput]) -> AggregatedSignals {
        outputs
            .iter()
            .fold(AggregatedSignals::default(), |mut acc, output| {
                acc.tags.extend_from_slice(&output.tags);
                acc.strength += output.strength;
                acc
            })
    }
}
