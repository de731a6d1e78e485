use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell coordinate (0-indexed)
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    pub const fn new(row: u32, col: u32) -> Self {
        Coord { row, col }
    }

    pub const fn origin() -> Self {
        Coord { row: 0, col: 0 }
    }

    /// Check if this coord is inside a `width` x `height` board
    pub fn is_valid(&self, width: u32, height: u32) -> bool {
        self.row < height && self.col < width
    }

    /// Canonical key for this coordinate
    pub fn index(&self) -> CellIndex {
        CellIndex::encode(*self)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Coord::new(row, col)
    }
}

/// Packed, hashable key for a [`Coord`].
///
/// The row lives in the high 32 bits and the column in the low 32 bits, so
/// encoding is injective, decoding is total, and ordering by key is the same
/// as row-major ordering of coordinates.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellIndex(u64);

impl CellIndex {
    pub const fn encode(coord: Coord) -> Self {
        CellIndex(((coord.row as u64) << 32) | coord.col as u64)
    }

    pub const fn decode(self) -> Coord {
        Coord {
            row: (self.0 >> 32) as u32,
            col: (self.0 & 0xFFFF_FFFF) as u32,
        }
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<Coord> for CellIndex {
    fn from(coord: Coord) -> Self {
        CellIndex::encode(coord)
    }
}

impl From<CellIndex> for Coord {
    fn from(index: CellIndex) -> Self {
        index.decode()
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coord = self.decode();
        write!(f, "{},{}", coord.row, coord.col)
    }
}

/// Iterator over every coordinate of a board, row by row
#[derive(Debug, Clone)]
pub struct CoordIter {
    width: u32,
    height: u32,
    current_row: u32,
    current_col: u32,
}

impl CoordIter {
    pub fn new(width: u32, height: u32) -> Self {
        CoordIter {
            width,
            height,
            current_row: 0,
            current_col: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.width == 0 || self.current_row >= self.height {
            return 0;
        }
        let rows_left = (self.height - self.current_row) as usize;
        rows_left * self.width as usize - self.current_col as usize
    }
}

impl Iterator for CoordIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.current_row >= self.height {
            return None;
        }

        let coord = Coord::new(self.current_row, self.current_col);

        self.current_col += 1;
        if self.current_col >= self.width {
            self.current_col = 0;
            self.current_row += 1;
        }

        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining();
        (count, Some(count))
    }
}

impl ExactSizeIterator for CoordIter {}
