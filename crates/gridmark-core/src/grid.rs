use serde::Serialize;

use crate::cell::Cell;
use crate::coord::{Coord, CoordIter};
use crate::error::GridError;

/// Default board width (a classic sudoku)
pub const DEFAULT_WIDTH: u32 = 9;
/// Default board height
pub const DEFAULT_HEIGHT: u32 = 9;
/// Largest accepted width or height. Keeps the cell count addressable on
/// 32-bit targets and every position representable as `i32`.
pub const MAX_DIMENSION: u32 = 1024;

/// A dense `width` x `height` board of cells.
///
/// Every coordinate inside the bounds holds exactly one [`Cell`], stored
/// row-major. Accessors take signed positions because they arrive straight
/// from pointer translation; anything outside the board is an
/// [`GridError`], never a silent no-op.
///
/// Row, column and whole-board views ([`Grid::get_row`], [`Grid::get_column`],
/// [`Grid::get_all_cells`]) are frozen snapshots: later edits to the grid do
/// not show up in a view that was already returned. Live access goes through
/// [`Grid::get_cell_mut`], [`Grid::iter`] and [`Grid::cells_mut`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Grid {
    /// Create a board filled with empty, modifiable cells.
    ///
    /// Dimensions above [`MAX_DIMENSION`] are clamped to it; validate through
    /// [`BoardConfig`](crate::config::BoardConfig) to reject them instead.
    pub fn new(width: u32, height: u32) -> Self {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            tracing::warn!(width, height, max = MAX_DIMENSION, "clamping oversized grid");
        }
        let width = width.min(MAX_DIMENSION);
        let height = height.min(MAX_DIMENSION);
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); count],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if position is within grid bounds
    pub fn is_valid_position(&self, row: i32, col: i32) -> bool {
        self.checked_row(row).is_some() && self.checked_col(col).is_some()
    }

    /// Validate a signed position and turn it into a [`Coord`]
    pub fn position(&self, row: i32, col: i32) -> Result<Coord, GridError> {
        match (self.checked_row(row), self.checked_col(col)) {
            (Some(row), Some(col)) => Ok(Coord::new(row, col)),
            _ => {
                tracing::warn!(
                    row,
                    col,
                    width = self.width,
                    height = self.height,
                    "rejected out-of-bounds grid address"
                );
                Err(GridError::OutOfBounds {
                    row: row.into(),
                    col: col.into(),
                    width: self.width,
                    height: self.height,
                })
            }
        }
    }

    /// Get the cell at a position
    pub fn get_cell(&self, row: i32, col: i32) -> Result<&Cell, GridError> {
        let coord = self.position(row, col)?;
        Ok(&self.cells[self.offset(coord)])
    }

    /// Get a mutable reference to the cell at a position
    pub fn get_cell_mut(&mut self, row: i32, col: i32) -> Result<&mut Cell, GridError> {
        let coord = self.position(row, col)?;
        let offset = self.offset(coord);
        Ok(&mut self.cells[offset])
    }

    /// Look up a cell by an already validated coordinate
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if coord.is_valid(self.width, self.height) {
            self.cells.get(self.offset(coord))
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if coord.is_valid(self.width, self.height) {
            let offset = self.offset(coord);
            self.cells.get_mut(offset)
        } else {
            None
        }
    }

    /// Replace the cell at a position entirely
    pub fn set_cell(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), GridError> {
        let coord = self.position(row, col)?;
        let offset = self.offset(coord);
        self.cells[offset] = cell;
        Ok(())
    }

    /// Snapshot of every cell in a row, left to right
    pub fn get_row(&self, row: i32) -> Result<Vec<Cell>, GridError> {
        let row = self.checked_row(row).ok_or_else(|| {
            tracing::warn!(row, height = self.height, "rejected out-of-bounds row");
            GridError::RowOutOfBounds {
                row: row.into(),
                height: self.height,
            }
        })?;
        let start = self.offset(Coord::new(row, 0));
        Ok(self.cells[start..start + self.width as usize].to_vec())
    }

    /// Snapshot of every cell in a column, top to bottom
    pub fn get_column(&self, col: i32) -> Result<Vec<Cell>, GridError> {
        let col = self.checked_col(col).ok_or_else(|| {
            tracing::warn!(col, width = self.width, "rejected out-of-bounds column");
            GridError::ColumnOutOfBounds {
                col: col.into(),
                width: self.width,
            }
        })?;
        Ok((0..self.height)
            .map(|row| self.cells[self.offset(Coord::new(row, col))].clone())
            .collect())
    }

    /// Snapshot of the whole board in row-major order
    pub fn get_all_cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> CoordIter {
        CoordIter::new(self.width, self.height)
    }

    /// Visit every cell once, row-major (row ascending, then column)
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.coords().zip(self.cells.iter())
    }

    /// Mutable row-major visit of every cell
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Cell)> {
        CoordIter::new(self.width, self.height).zip(self.cells.iter_mut())
    }

    /// Clear every cell exactly once
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Template the board from a row-major list of givens.
    ///
    /// `Some(value)` becomes a fixed cell, `None` an empty modifiable one.
    /// Cells past the end of `givens` are reset to empty. Fails without
    /// touching the board if `givens` is longer than the board.
    pub fn load_givens<S: AsRef<str>>(&mut self, givens: &[Option<S>]) -> Result<(), GridError> {
        if givens.len() > self.cells.len() {
            let overflow = self.cells.len();
            let (row, col) = match self.width {
                0 => (0, overflow as i64),
                width => ((overflow / width as usize) as i64, (overflow % width as usize) as i64),
            };
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }

        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = match givens.get(i) {
                Some(Some(value)) => Cell::fixed(value.as_ref()),
                _ => Cell::default(),
            };
        }
        Ok(())
    }

    fn checked_row(&self, row: i32) -> Option<u32> {
        u32::try_from(row).ok().filter(|row| *row < self.height)
    }

    fn checked_col(&self, col: i32) -> Option<u32> {
        u32::try_from(col).ok().filter(|col| *col < self.width)
    }

    fn offset(&self, coord: Coord) -> usize {
        coord.row as usize * self.width as usize + coord.col as usize
    }
}
