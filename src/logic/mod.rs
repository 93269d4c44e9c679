pub mod serializer;

use log::debug;

use crate::data::{EditorData, UsageBuilder};
use crate::error::GridError;
use crate::types::{EditorConfig, ImportReport, PlacementRecord, Rotation, UsageEntry};

/// Session operations driven by UI events. Every call completes synchronously.
pub struct EditorLogic {
    data: EditorData,
}

impl EditorLogic {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            data: EditorData::new(width, height)?,
        })
    }

    pub fn with_config(config: EditorConfig) -> Result<Self, GridError> {
        Ok(Self {
            data: EditorData::with_config(config)?,
        })
    }

    pub fn data(&self) -> &EditorData {
        &self.data
    }

    pub fn select_tile(&mut self, collection: &str, file: &str) {
        self.data.selection_mut().select_tile(collection, file);
        self.data.record_activity(format!("select tile {}/{}", collection, file));
    }

    pub fn select_color(&mut self, color: &str) {
        self.data.selection_mut().select_color(color);
        self.data.record_activity(format!("select color {}", color));
    }

    pub fn rotate(&mut self) -> Rotation {
        let rotation = self.data.selection_mut().rotate();
        self.data.record_activity(format!("rotation set to {}", rotation.degrees()));
        rotation
    }

    /// Places a caller-built record and pushes it onto the undo history
    pub fn place(&mut self, record: PlacementRecord) -> Result<PlacementRecord, GridError> {
        let placed = self.data.grid_mut().place(record)?.clone();
        self.data.history_mut().push(placed.clone());
        self.data.record_activity(format!(
            "place tile {} at {},{}",
            placed.tile_ref, placed.x, placed.y
        ));
        Ok(placed)
    }

    /// Places the selected tile at `(x, y)`. `Ok(None)` when no tile is selected.
    pub fn place_at(&mut self, x: i64, y: i64) -> Result<Option<PlacementRecord>, GridError> {
        let Some(record) = self.data.build_record(x, y) else {
            debug!("no tile selected, ignoring click at {},{}", x, y);
            return Ok(None);
        };
        self.place(record).map(Some)
    }

    /// Removes by hand. History entries for the removed record are dropped so
    /// that `can_undo` and `history_top` only see tiles still on the grid.
    pub fn remove_at(&mut self, x: i64, y: i64) -> Option<PlacementRecord> {
        let removed = self.data.grid_mut().remove(x, y)?;
        self.data.prune_history();
        self.data.record_activity(format!("remove tile at {},{}", x, y));
        Some(removed)
    }

    /// Removes the most recent placement that is still on the grid.
    ///
    /// History entries whose record no longer occupies its cell (removed by
    /// hand, or replaced since) are discarded rather than clearing whatever
    /// now sits at that position.
    pub fn undo(&mut self) -> Result<PlacementRecord, GridError> {
        while let Some(entry) = self.data.history_mut().pop() {
            let (x, y) = entry.position();
            if self.data.grid().get(x, y) != Some(&entry) {
                debug!("discarding stale history entry {}", entry.id);
                continue;
            }
            if let Some(removed) = self.data.grid_mut().remove(x, y) {
                self.data.record_activity("undo");
                return Ok(removed);
            }
        }
        Err(GridError::EmptyHistory)
    }

    pub fn reset(&mut self) {
        self.data.clear_all();
        self.data.record_activity("reset");
    }

    pub fn tiles(&self) -> Vec<PlacementRecord> {
        serializer::serialize(self.data.grid())
    }

    pub fn usage(&self) -> Vec<UsageEntry> {
        UsageBuilder::build(self.data.grid().occupied())
    }

    pub fn export_json(&mut self) -> Result<String, GridError> {
        let envelope = serializer::export_envelope(self.data.grid(), self.data.cell_size());
        let json = serializer::encode_export(&envelope)?;
        self.data.record_activity("export json");
        Ok(json)
    }

    /// Replaces the grid with the document's tiles. A malformed document
    /// leaves grid, history and cell size untouched.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport, GridError> {
        let document = serializer::parse_import(json)?;
        if let Some(cell_size) = document.cell_size {
            self.data.set_cell_size(cell_size)?;
        }
        let report = serializer::deserialize(self.data.grid_mut(), document.tiles);
        self.data.history_mut().clear();
        if report.skipped() > 0 {
            debug!(
                "import skipped {} out-of-range and {} duplicate tiles",
                report.out_of_range, report.duplicates
            );
        }
        self.data.record_activity("import json");
        Ok(report)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&PlacementRecord> {
        self.data.grid().get(x, y)
    }

    pub fn can_undo(&self) -> bool {
        !self.data.history().is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.data.history().len()
    }

    pub fn history_top(&self) -> Option<&PlacementRecord> {
        self.data.history().peek()
    }

    pub fn cell_size(&self) -> u32 {
        self.data.cell_size()
    }

    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), GridError> {
        self.data.set_cell_size(cell_size)?;
        self.data.record_activity(format!("cell size set to {}", cell_size));
        Ok(())
    }

    pub fn show_grid_lines(&self) -> bool {
        self.data.show_grid_lines()
    }

    pub fn toggle_grid_lines(&mut self) -> bool {
        let show = !self.data.show_grid_lines();
        self.data.set_show_grid_lines(show);
        let label = if show { "shown" } else { "hidden" };
        self.data.record_activity(format!("grid lines {}", label));
        show
    }

    pub fn cell_at_pixel(&self, px: f64, py: f64) -> Option<(i64, i64)> {
        self.data.cell_at_pixel(px, py)
    }

    pub fn activity_log(&self) -> String {
        self.data.activity().contents()
    }
}
