use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_COLOR, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_SHOW_GRID_LINES,
};
use crate::error::GridError;

/// Session configuration. Missing fields fall back to the editor defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub show_grid_lines: bool,
    pub default_color: String,
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_size == 0 {
            return Err(GridError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            show_grid_lines: DEFAULT_SHOW_GRID_LINES,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}
