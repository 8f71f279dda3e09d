use serde::{Deserialize, Serialize};

/// Reported outcome of a past prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackOutcome {
    Correct,
    Incorrect,
}

impl FeedbackOutcome {
    /// Only the exact label `"correct"` counts as correct.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("correct") => Self::Correct,
            _ => Self::Incorrect,
        }
    }
}

/// Running counters of correct and total predictions. Never decreases.
///
/// Purely descriptive: nothing here feeds back into the pattern weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyTracker {
    pub correct: u64,
    pub total: u64,
}

impl AccuracyTracker {
    pub fn record(&mut self, outcome: FeedbackOutcome) {
        self.total += 1;
        if outcome == FeedbackOutcome::Correct {
            self.correct += 1;
        }
    }

    /// `correct / total`, or 0.0 before any feedback.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}
