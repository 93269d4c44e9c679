//! Error type shared by the grid, history and serialization layers.

use thiserror::Error;

/// Every condition here is recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid construction with a zero (or overflowing) size
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    /// Coordinates outside `[0, width) x [0, height)`
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfRange { x: i64, y: i64 },
    /// Placement target already holds a record
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i64, y: i64 },
    #[error("nothing to undo")]
    EmptyHistory,
    /// Import payload did not match the interchange shape; nothing was changed
    #[error("malformed import: {0}")]
    MalformedImport(String),
    #[error("invalid cell size {0}")]
    InvalidCellSize(u32),
    #[error("failed to encode export: {0}")]
    Encode(String),
}

impl GridError {
    pub fn malformed(message: impl Into<String>) -> Self {
        GridError::MalformedImport(message.into())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::MalformedImport(err.to_string())
    }
}
