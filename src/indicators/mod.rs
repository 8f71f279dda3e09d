//! Snapshot reader and the analyzer set.

pub mod parser;
pub mod registry;

pub mod composite;
pub mod oscillators;
pub mod price_position;
pub mod trend_strength;
pub mod volume_pattern;

pub use composite::CompositeAnalyzer;
pub use oscillators::OscillatorAnalyzer;
pub use parser::parse_payload;
pub use price_position::PricePositionAnalyzer;
pub use registry::{Analyzer, AnalyzerOutput, AnalyzerRegistry};
pub use trend_strength::TrendStrengthAnalyzer;
pub use volume_pattern::VolumePatternAnalyzer;
