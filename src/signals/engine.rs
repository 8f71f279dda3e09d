//! Signal engine: snapshot in, decision out.
//!
//! The engine owns all mutable state. Pattern weights sit behind a read/write
//! lock; history and accuracy share one mutex so every stats read sees a single
//! point in time. Evaluation itself is synchronous and lock-free apart from
//! copying the current weights and appending the final record.

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::indicators::parser::parse_payload;
use crate::indicators::registry::AnalyzerRegistry;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{
    Analysis, DecisionRecord, DegradedResponse, PredictionResponse, SignalReport,
};
use crate::models::stats::{HealthSnapshot, StatsSnapshot};
use crate::signals::aggregation::{AggregatedSignals, Aggregator};
use crate::signals::decision::DecisionEngine;
use crate::signals::regime::RegimeClassifier;
use crate::signals::scoring::round_to;
use crate::signals::weights::PatternWeights;
use crate::store::{FeedbackOutcome, Ledger};

pub struct SignalEngine {
    config: EngineConfig,
    analyzers: AnalyzerRegistry,
    decision: DecisionEngine,
    classifier: RegimeClassifier,
    weights: RwLock<PatternWeights>,
    ledger: Mutex<Ledger>,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_weights(config, PatternWeights::default())
    }

    pub fn with_weights(config: EngineConfig, weights: PatternWeights) -> Self {
        info!(
            volatility_gate_vix = config.volatility_gate_vix,
            history_capacity = config.history_capacity,
            "Signal engine initialized"
        );
        Self {
            analyzers: AnalyzerRegistry::new(),
            decision: DecisionEngine::from_config(&config),
            classifier: RegimeClassifier::from_config(&config),
            weights: RwLock::new(weights),
            ledger: Mutex::new(Ledger::new(config.history_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pattern_weights(&self) -> PatternWeights {
        *self.weights.read()
    }

    /// Replace all pattern weights. Rejected, leaving the current weights in
    /// place, if any weight is not finite.
    pub fn set_pattern_weights(&self, weights: PatternWeights) -> Result<()> {
        weights.validate().map_err(EngineError::invalid_request)?;
        *self.weights.write() = weights;
        info!("Pattern weights replaced");
        Ok(())
    }

    /// Run every analyzer against `snapshot` and aggregate the result.
    pub fn analyze(&self, snapshot: &IndicatorSnapshot) -> AggregatedSignals {
        let weights = self.pattern_weights();
        Aggregator::aggregate(&self.analyzers.run(snapshot, &weights))
    }

    /// Evaluate a raw payload (bare record or one-element list).
    ///
    /// Any error is returned to the caller; nothing is recorded on failure.
    pub fn evaluate(&self, payload: &Value) -> Result<SignalReport> {
        let snapshot = parse_payload(payload)?;
        Ok(self.evaluate_snapshot(snapshot))
    }

    /// Evaluate an already validated snapshot and append it to the history.
    pub fn evaluate_snapshot(&self, snapshot: IndicatorSnapshot) -> SignalReport {
        let aggregated = self.analyze(&snapshot);
        let decision = self
            .decision
            .decide(&aggregated.tags, aggregated.strength, &snapshot);

        let analysis = Analysis {
            signal_count: aggregated.tags.len(),
            detected_signals: aggregated.tags.clone(),
            total_strength: round_to(aggregated.strength, 2),
            vix_condition: self.classifier.vix_condition(snapshot.vix.value),
            market_regime: self.classifier.market_regime(&snapshot),
            ltp: snapshot.ltp,
        };

        let timestamp = Utc::now();
        let record = DecisionRecord {
            timestamp,
            signal: decision.signal,
            confidence: decision.confidence,
            tags: aggregated.tags,
            strength: aggregated.strength,
            snapshot,
        };
        if let Some(evicted) = self.ledger.lock().history.push(record) {
            debug!(evicted_at = %evicted.timestamp, "History full, evicted oldest record");
        }

        info!(
            signal = %decision.signal,
            confidence = decision.confidence,
            strength = aggregated.strength,
            tags = analysis.signal_count,
            "Prediction generated"
        );

        SignalReport {
            signal: decision.signal,
            confidence: round_to(decision.confidence, 3),
            analysis,
            timestamp,
        }
    }

    /// Like [`evaluate`](Self::evaluate), but a computation error degrades to a
    /// `HOLD` response carrying the error message. Invalid requests still fail.
    pub fn predict(&self, payload: &Value) -> Result<PredictionResponse> {
        match self.evaluate(payload) {
            Ok(report) => Ok(PredictionResponse::Report(report)),
            Err(EngineError::Computation(message)) => {
                error!(error = %message, "Signal generation failed, answering HOLD");
                Ok(PredictionResponse::Degraded(DegradedResponse::new(message)))
            }
            Err(err) => {
                warn!(error = %err, "Rejected prediction request");
                Err(err)
            }
        }
    }

    /// Count an externally reported outcome. `predicted_signal` is informational
    /// and is not matched against the history.
    pub fn record_feedback(&self, predicted_signal: Option<&str>, outcome: FeedbackOutcome) {
        let mut ledger = self.ledger.lock();
        ledger.accuracy.record(outcome);
        info!(
            predicted_signal = predicted_signal.unwrap_or("unknown"),
            outcome = ?outcome,
            correct = ledger.accuracy.correct,
            total = ledger.accuracy.total,
            "Accuracy updated"
        );
    }

    pub fn accuracy(&self) -> f64 {
        self.ledger.lock().accuracy.accuracy()
    }

    pub fn history_len(&self) -> usize {
        self.ledger.lock().history.len()
    }

    /// The last `n` decision records, oldest first.
    pub fn recent_history(&self, n: usize) -> Vec<DecisionRecord> {
        self.ledger.lock().history.recent(n)
    }

    pub fn stats(&self) -> StatsSnapshot {
        let pattern_weights = self.pattern_weights();
        let ledger = self.ledger.lock();
        StatsSnapshot {
            total_predictions: ledger.accuracy.total,
            correct_predictions: ledger.accuracy.correct,
            accuracy: round_to(ledger.accuracy.accuracy(), 3),
            recent_signals: ledger.history.recent(self.config.recent_signals_limit),
            pattern_weights,
        }
    }

    pub fn health(&self) -> HealthSnapshot {
        let pattern_weights = self.pattern_weights();
        let ledger = self.ledger.lock();
        HealthSnapshot {
            total_signals: ledger.history.len(),
            accuracy: round_to(ledger.accuracy.accuracy(), 3),
            pattern_weights,
        }
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
