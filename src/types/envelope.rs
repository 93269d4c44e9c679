use serde::Serialize;

use super::placement::PlacementRecord;

/// Export document: the active cell size plus the occupied records in row-major order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub cell_size: u32,
    pub tiles: Vec<PlacementRecord>,
}

/// A validated import document. A bare record array yields `cell_size: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDocument {
    pub cell_size: Option<u32>,
    pub tiles: Vec<PlacementRecord>,
}

/// Outcome of writing records into a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub placed: usize,
    pub out_of_range: usize,
    pub duplicates: usize,
}

impl ImportReport {
    pub fn skipped(&self) -> usize {
        self.out_of_range + self.duplicates
    }
}
