//! In-memory bookkeeping: decision history and prediction accuracy.

pub mod accuracy;
pub mod history;

pub use accuracy::{AccuracyTracker, FeedbackOutcome};
pub use history::HistoryStore;

/// History and accuracy kept together so readers see one consistent state.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub history: HistoryStore,
    pub accuracy: AccuracyTracker,
}

impl Ledger {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: HistoryStore::new(history_capacity),
            accuracy: AccuracyTracker::default(),
        }
    }
}
