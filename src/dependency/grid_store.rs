use log::debug;

use crate::error::GridError;
use crate::types::PlacementRecord;

/// Fixed-size occupancy matrix, stored flattened in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct GridStore {
    width: usize,
    height: usize,
    cells: Vec<Option<PlacementRecord>>,
}

impl GridStore {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let total_cells = width
            .checked_mul(height)
            .filter(|&total| total > 0)
            .ok_or(GridError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![None; total_cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y).is_some()
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Writes `record` into its cell. Fails without mutating anything when the
    /// coordinates are out of range or the cell is taken.
    pub fn place(&mut self, record: PlacementRecord) -> Result<&PlacementRecord, GridError> {
        let (x, y) = record.position();
        let index = self.index_of(x, y).ok_or(GridError::OutOfRange { x, y })?;
        let cell = &mut self.cells[index];
        if cell.is_some() {
            debug!("cell ({}, {}) occupied, rejecting {}", x, y, record.id);
            return Err(GridError::CellOccupied { x, y });
        }
        let placed: &PlacementRecord = cell.insert(record);
        Ok(placed)
    }

    pub fn remove(&mut self, x: i64, y: i64) -> Option<PlacementRecord> {
        let index = self.index_of(x, y)?;
        self.cells[index].take()
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&PlacementRecord> {
        let index = self.index_of(x, y)?;
        self.cells[index].as_ref()
    }

    pub fn is_occupied(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some()
    }

    /// Occupied records top-to-bottom, left-to-right. Each call walks the cells afresh.
    pub fn occupied(&self) -> impl Iterator<Item = &PlacementRecord> + '_ {
        self.cells.iter().filter_map(Option::as_ref)
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
