pub mod input;
pub mod listener;
pub mod selection;

pub use input::{is_cell_action, is_gesture_event, EditAction, PointerButton, PointerEvent};
pub use listener::{ListenerHandle, PointerListeners};
pub use selection::{DragState, Selection};

use crate::cell::Cell;
use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::error::GridError;
use crate::grid::Grid;

/// One editable board: the grid, its selection and the pointer listeners.
///
/// This is the single owner every mutation goes through: the grid and the
/// selection are only lent out shared, and cell edits go through the board so
/// the grid keeps the dimensions the selection was built for. Events are
/// handled synchronously in delivery order. The listener table is reference counted
/// without locking, so a board stays on the thread that created it.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    selection: Selection,
    listeners: PointerListeners,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self {
            selection: Selection::new(grid.width(), grid.height()),
            grid,
            listeners: PointerListeners::new(),
            config,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self::new(BoardConfig::new(width, height))
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }

    // =========================================================================
    // Cell edits
    // =========================================================================

    /// Live access to one cell for value and mark edits
    pub fn cell_mut(&mut self, row: i32, col: i32) -> Result<&mut Cell, GridError> {
        self.grid.get_cell_mut(row, col)
    }

    pub fn set_cell(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), GridError> {
        self.grid.set_cell(row, col, cell)
    }

    /// Clear every cell; returns the coordinates that changed
    pub fn clear_all(&mut self) -> Vec<Coord> {
        self.apply(EditAction::ClearAll)
    }

    /// Template the board from row-major givens, see [`Grid::load_givens`]
    pub fn load_givens<S: AsRef<str>>(&mut self, givens: &[Option<S>]) -> Result<(), GridError> {
        self.grid.load_givens(givens)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select(&mut self, row: i32, col: i32) -> bool {
        self.selection.select(row, col)
    }

    pub fn deselect(&mut self, row: i32, col: i32) -> bool {
        self.selection.deselect(row, col)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Feed one pointer event into the drag protocol.
    ///
    /// Move and release events only reach the selection while a gesture holds
    /// a listener. Returns whether selection or drag state changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if is_gesture_event(&event) && !self.listeners.is_listening() {
            return false;
        }

        match event {
            PointerEvent::Down { button, row, col } => {
                self.selection
                    .start_selection(button, row, col, &self.listeners)
            }
            PointerEvent::Move { row, col } => self.selection.pointer_move(row, col),
            PointerEvent::Up { button } => self.selection.pointer_up(button),
        }
    }

    pub fn pointer_down(&mut self, button: PointerButton, row: i32, col: i32) -> bool {
        self.handle_pointer(PointerEvent::Down { button, row, col })
    }

    pub fn pointer_move(&mut self, row: i32, col: i32) -> bool {
        self.handle_pointer(PointerEvent::Move { row, col })
    }

    pub fn pointer_up(&mut self, button: PointerButton) -> bool {
        self.handle_pointer(PointerEvent::Up { button })
    }

    pub fn is_selected(&self, row: i32, col: i32) -> bool {
        self.selection.contains(row, col)
    }

    /// Apply an editor command to the selection (or board, for `ClearAll`).
    ///
    /// Returns the coordinates whose cell state changed, in row-major order.
    pub fn apply(&mut self, action: EditAction) -> Vec<Coord> {
        let affected = match action {
            EditAction::SetValue(value) => {
                let mut affected = Vec::new();
                for coord in self.selection.iter() {
                    if let Some(cell) = self.grid.cell_mut(coord) {
                        if cell.set_value(value.as_str()) {
                            affected.push(coord);
                        }
                    }
                }
                affected
            }
            EditAction::ToggleMark(kind, mark) => {
                let mut affected = Vec::new();
                for coord in self.selection.iter() {
                    if let Some(cell) = self.grid.cell_mut(coord) {
                        cell.marks_mut(kind).toggle(mark.as_str());
                        affected.push(coord);
                    }
                }
                affected
            }
            EditAction::ClearCells => {
                let mut affected = Vec::new();
                for coord in self.selection.iter() {
                    if let Some(cell) = self.grid.cell_mut(coord) {
                        if clear_cell(cell) {
                            affected.push(coord);
                        }
                    }
                }
                affected
            }
            EditAction::ClearSelection => {
                self.selection.clear();
                Vec::new()
            }
            EditAction::ClearAll => self
                .grid
                .cells_mut()
                .filter_map(|(coord, cell)| clear_cell(cell).then_some(coord))
                .collect(),
        };

        tracing::debug!(affected = affected.len(), "edit action applied");
        affected
    }
}

/// Clear a cell, reporting whether anything was removed
fn clear_cell(cell: &mut Cell) -> bool {
    let before = cell.clone();
    cell.clear();
    *cell != before
}
