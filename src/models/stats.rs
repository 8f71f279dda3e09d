use serde::Serialize;

use crate::models::signal::DecisionRecord;
use crate::signals::weights::PatternWeights;

/// Point-in-time view of the engine's bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total_predictions: u64,
    pub correct_predictions: u64,
    pub accuracy: f64,
    /// Most recent records, oldest first.
    pub recent_signals: Vec<DecisionRecord>,
    pub pattern_weights: PatternWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub total_signals: usize,
    pub accuracy: f64,
    pub pattern_weights: PatternWeights,
}
