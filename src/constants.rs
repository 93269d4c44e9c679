// Shared editor defaults

// Grid dimensions in cells
pub const DEFAULT_GRID_WIDTH: usize = 8;
pub const DEFAULT_GRID_HEIGHT: usize = 4;

// Rendered size of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 80;

pub const DEFAULT_COLOR: &str = "#ff0000";
pub const DEFAULT_SHOW_GRID_LINES: bool = true;

pub const TILE_ID_PREFIX: &str = "tile-";
pub const LOG_INITIALIZED_MESSAGE: &str = "Logger initialized";
