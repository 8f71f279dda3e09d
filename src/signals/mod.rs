//! Signal aggregation, decision making and the engine that ties them together.

pub mod aggregation;
pub mod categories;
pub mod decision;
pub mod engine;
pub mod regime;
pub mod scoring;
pub mod weights;

pub use aggregation::{AggregatedSignals, Aggregator};
pub use categories::{is_bearish, is_bullish, tally, DirectionalTally};
pub use decision::DecisionEngine;
pub use engine::SignalEngine;
pub use regime::RegimeClassifier;
pub use weights::PatternWeights;
