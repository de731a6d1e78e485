//! Zero-copy board snapshot for rendering from JavaScript.
//!
//! The board is flattened row-major into parallel arrays. Per-cell state
//! that fits in a bit lives in a packed `u32` the renderer can read straight
//! out of wasm memory through a `Uint32Array`.

use gridmark_core::{Board, MarkKind};

/// Packed cell flags (4 bytes / u32)
///
/// Bit layout:
/// - Bit 0: modifiable
/// - Bit 1: selected
/// - Bit 2: has a value
/// - Bit 3: has centre marks
/// - Bit 4: has corner marks
/// - Bit 5: has colours
/// - Bits 6-31: reserved
pub const FLAG_MODIFIABLE: u32 = 1 << 0;
pub const FLAG_SELECTED: u32 = 1 << 1;
pub const FLAG_HAS_VALUE: u32 = 1 << 2;
pub const FLAG_CENTRE_MARKS: u32 = 1 << 3;
pub const FLAG_CORNER_MARKS: u32 = 1 << 4;
pub const FLAG_COLOURS: u32 = 1 << 5;

#[inline]
pub fn pack_flags(
    modifiable: bool,
    selected: bool,
    has_value: bool,
    centre: bool,
    corner: bool,
    colours: bool,
) -> u32 {
    let mut flags: u32 = 0;
    if modifiable {
        flags |= FLAG_MODIFIABLE;
    }
    if selected {
        flags |= FLAG_SELECTED;
    }
    if has_value {
        flags |= FLAG_HAS_VALUE;
    }
    if centre {
        flags |= FLAG_CENTRE_MARKS;
    }
    if corner {
        flags |= FLAG_CORNER_MARKS;
    }
    if colours {
        flags |= FLAG_COLOURS;
    }
    flags
}

/// Row-major snapshot of a whole board.
#[derive(Debug, Default)]
pub struct BoardBuffer {
    /// Packed flags per cell
    pub flags: Vec<u32>,
    /// Cell values ("" when empty)
    pub values: Vec<String>,
    /// First colour of each cell ("" when none)
    pub colours: Vec<String>,
}

impl BoardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            flags: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            colours: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.flags.clear();
        self.values.clear();
        self.colours.clear();
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Refill the buffer from the board, row by row
    pub fn populate(&mut self, board: &Board) {
        self.clear();
        let selection = board.selection();
        for (coord, cell) in board.grid().iter() {
            self.flags.push(pack_flags(
                cell.modifiable(),
                selection.contains_coord(coord),
                cell.has_value(),
                !cell.marks(MarkKind::Centre).is_empty(),
                !cell.marks(MarkKind::Corner).is_empty(),
                !cell.marks(MarkKind::Colour).is_empty(),
            ));
            self.values.push(cell.value().to_string());
            self.colours
                .push(cell.colours.first().unwrap_or_default().to_string());
        }
    }
}
