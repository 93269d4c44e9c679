mod record_builder;
mod selection;
mod usage_builder;

pub use record_builder::RecordBuilder;
pub use selection::Selection;
pub use usage_builder::UsageBuilder;

use crate::dependency::{ActivityLog, GridStore, HistoryLog};
use crate::error::GridError;
use crate::types::{EditorConfig, PlacementRecord};

/// State of one editing session. Created once per session and dropped with it.
pub struct EditorData {
    grid: GridStore,
    history: HistoryLog,
    selection: Selection,
    record_builder: RecordBuilder,
    activity: ActivityLog,
    cell_size: u32,
    show_grid_lines: bool,
}

impl EditorData {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_config(EditorConfig {
            width,
            height,
            ..EditorConfig::default()
        })
    }

    pub fn with_config(config: EditorConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            grid: GridStore::new(config.width, config.height)?,
            history: HistoryLog::new(),
            selection: Selection::new(config.default_color),
            record_builder: RecordBuilder::new(),
            activity: ActivityLog::new(),
            cell_size: config.cell_size,
            show_grid_lines: config.show_grid_lines,
        })
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridStore {
        &mut self.grid
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn record_activity(&mut self, message: impl AsRef<str>) {
        self.activity.record(message);
    }

    /// Record for a click at `(x, y)` built from the current selection
    pub fn build_record(&mut self, x: i64, y: i64) -> Option<PlacementRecord> {
        self.record_builder.build(&self.selection, x, y)
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), GridError> {
        if cell_size == 0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        self.cell_size = cell_size;
        Ok(())
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    /// Cell under a pixel offset from the grid's top-left corner
    pub fn cell_at_pixel(&self, px: f64, py: f64) -> Option<(i64, i64)> {
        let size = f64::from(self.cell_size);
        let x = (px / size).floor();
        let y = (py / size).floor();
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (x, y) = (x as i64, y as i64);
        self.grid.contains(x, y).then_some((x, y))
    }

    /// Drops history entries whose record no longer occupies its cell
    pub fn prune_history(&mut self) {
        let grid = &self.grid;
        self.history.retain(|entry| grid.get(entry.x, entry.y) == Some(entry));
    }

    /// Empties grid and history
    pub fn clear_all(&mut self) {
        self.grid.clear();
        self.history.clear();
    }
}
