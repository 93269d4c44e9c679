use crate::types::PlacementRecord;

/// Append-only record of successful placements, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<PlacementRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PlacementRecord) {
        self.entries.push(record);
    }

    pub fn pop(&mut self) -> Option<PlacementRecord> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&PlacementRecord> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keeps only the entries for which `keep` returns true, preserving order
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&PlacementRecord) -> bool,
    {
        self.entries.retain(keep);
    }
}
