use std::collections::VecDeque;

use crate::models::signal::DecisionRecord;

/// Fixed-capacity rolling buffer of decision records.
///
/// Append-only; once full, every push evicts the oldest record.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    records: VecDeque<DecisionRecord>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, returning the evicted one if the buffer was full.
    pub fn push(&mut self, record: DecisionRecord) -> Option<DecisionRecord> {
        let evicted = if self.records.len() >= self.capacity {
            self.records.pop_front()
        } else {
            None
        };
        self.records.push_back(record);
        evicted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Vec<DecisionRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).cloned().collect()
    }

    pub fn latest(&self) -> Option<&DecisionRecord> {
        self.records.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRecord> {
        self.records.iter()
    }
}
