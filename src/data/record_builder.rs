use crate::constants::TILE_ID_PREFIX;
use crate::dependency::epoch_millis;
use crate::types::PlacementRecord;

use super::selection::Selection;

/// Builds placement records from the active selection with session-unique ids
pub struct RecordBuilder {
    sequence: u64,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self { sequence: 0 }
    }

    /// `tile-<epoch millis>-<seq>`; the sequence keeps ids distinct within one millisecond
    pub fn next_id(&mut self) -> String {
        self.sequence = self.sequence.wrapping_add(1);
        format!("{}{}-{}", TILE_ID_PREFIX, epoch_millis(), self.sequence)
    }

    /// None when no tile is selected
    pub fn build(&mut self, selection: &Selection, x: i64, y: i64) -> Option<PlacementRecord> {
        let tile_ref = selection.tile_ref()?.to_string();
        Some(PlacementRecord::new(
            self.next_id(),
            tile_ref,
            x,
            y,
            selection.rotation(),
            selection.color(),
        ))
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
