//! Analyzer trait and the registry that runs the analyzer set.

use crate::indicators::{
    CompositeAnalyzer, OscillatorAnalyzer, PricePositionAnalyzer, TrendStrengthAnalyzer,
    VolumePatternAnalyzer,
};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::SignalTag;
use crate::signals::weights::PatternWeights;

/// Tags and the strength delta one analyzer derived from a snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerOutput {
    pub tags: Vec<SignalTag>,
    pub strength: f64,
}

impl AnalyzerOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tag together with its contribution.
    pub fn push(&mut self, tag: SignalTag, delta: f64) {
        self.tags.push(tag);
        self.strength += delta;
    }

    pub fn contains(&self, tag: SignalTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// A pure mapping from a snapshot to tags plus a strength delta.
///
/// Analyzers never see each other's output.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    fn analyze(&self, snapshot: &IndicatorSnapshot, weights: &PatternWeights) -> AnalyzerOutput;
}

/// Ordered analyzer set. Order only affects the order of the emitted tags.
pub struct AnalyzerRegistry {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// Composite, volume-pattern, trend, price-position, oscillator.
    pub fn new() -> Self {
        Self::with_analyzers(vec![
            Box::new(CompositeAnalyzer),
            Box::new(VolumePatternAnalyzer),
            Box::new(TrendStrengthAnalyzer),
            Box::new(PricePositionAnalyzer),
            Box::new(OscillatorAnalyzer),
        ])
    }

    pub fn with_analyzers(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self { analyzers }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    pub fn run(&self, snapshot: &IndicatorSnapshot, weights: &PatternWeights) -> Vec<AnalyzerOutput> {
        self.analyzers
            .iter()
            .map(|analyzer| analyzer.analyze(snapshot, weights))
            .collect()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
