use gridmark_core::{
    Board, BoardConfig, Cell, ConfigError, Coord, EditAction, GridError, MarkKind, PointerButton,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::snapshot::BoardBuffer;

/// Board engine exposed to JavaScript
#[wasm_bindgen]
pub struct GridmarkEngine {
    board: Board,
    /// Reusable buffer for render snapshots
    buffer: BoardBuffer,
}

/// Structured error object for JavaScript
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsGridmarkError {
    code: String,
    message: String,
}

impl From<GridError> for JsGridmarkError {
    fn from(err: GridError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for JsGridmarkError {
    fn from(err: ConfigError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl JsGridmarkError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn into_js(self) -> JsValue {
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        web_sys::console::error_1(&format!("[Gridmark] {}: {}", self.code, self.message).into());

        serde_wasm_bindgen::to_value(&self).unwrap_or(JsValue::NULL)
    }
}

fn to_js_error(err: impl Into<JsGridmarkError>) -> JsValue {
    err.into().into_js()
}

/// Cell data for JavaScript
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub row: u32,
    pub col: u32,
    pub value: String,
    pub modifiable: bool,
    pub selected: bool,
    pub centre_marks: Vec<String>,
    pub corner_marks: Vec<String>,
    pub colours: Vec<String>,
}

impl CellData {
    pub fn from_cell(coord: Coord, cell: &Cell, selected: bool) -> Self {
        CellData {
            row: coord.row,
            col: coord.col,
            value: cell.value().to_string(),
            modifiable: cell.modifiable(),
            selected,
            centre_marks: cell.centre_marks.get(),
            corner_marks: cell.corner_marks.get(),
            colours: cell.colours.get(),
        }
    }
}

/// Parse a mark category name coming from JavaScript
fn parse_mark_kind(kind: &str) -> Result<MarkKind, JsGridmarkError> {
    MarkKind::from_name(kind).ok_or_else(|| {
        JsGridmarkError::new("UNKNOWN_MARK_KIND", format!("unknown mark kind: {kind}"))
    })
}

/// Parse a JSON editor command
fn parse_action(json: &str) -> Result<EditAction, JsGridmarkError> {
    serde_json::from_str(json)
        .map_err(|err| JsGridmarkError::new("INVALID_ACTION", format!("invalid action: {err}")))
}

/// Flatten coordinates into `[r0, c0, r1, c1, ...]`
fn flatten_coords(coords: impl IntoIterator<Item = Coord>) -> Vec<u32> {
    coords
        .into_iter()
        .flat_map(|coord| [coord.row, coord.col])
        .collect()
}

#[wasm_bindgen]
impl GridmarkEngine {
    /// Create an engine with an empty `width` x `height` board
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<GridmarkEngine, JsValue> {
        let config = BoardConfig::new(width, height);
        config.validate().map_err(to_js_error)?;
        Ok(Self::with_board(Board::new(config)))
    }

    /// Create an engine from a JSON [`BoardConfig`]
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<GridmarkEngine, JsValue> {
        let config = BoardConfig::from_json(json).map_err(to_js_error)?;
        Ok(Self::with_board(Board::new(config)))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.board.grid().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.board.grid().height()
    }

    #[wasm_bindgen(getter, js_name = primaryButton)]
    pub fn primary_button(&self) -> u8 {
        self.board.config().primary_button.0
    }

    // =========================================================================
    // Cell commands and queries
    // =========================================================================

    /// Get cell data for rendering
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let data = self.cell_data(row, col).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&data).map_err(|err| {
            JsGridmarkError::new("SERIALIZATION", err.to_string()).into_js()
        })
    }

    /// Enter a value; returns false when the cell is fixed or unchanged
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, row: i32, col: i32, value: &str) -> Result<bool, JsValue> {
        let cell = self.board.cell_mut(row, col).map_err(to_js_error)?;
        Ok(cell.set_value(value))
    }

    /// Toggle a mark ("centre", "corner" or "colour") on one cell
    #[wasm_bindgen(js_name = toggleMark)]
    pub fn toggle_mark(
        &mut self,
        row: i32,
        col: i32,
        kind: &str,
        mark: &str,
    ) -> Result<(), JsValue> {
        let kind = parse_mark_kind(kind).map_err(JsGridmarkError::into_js)?;
        let cell = self.board.cell_mut(row, col).map_err(to_js_error)?;
        cell.marks_mut(kind).toggle(mark);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearCell)]
    pub fn clear_cell(&mut self, row: i32, col: i32) -> Result<(), JsValue> {
        self.board.cell_mut(row, col).map_err(to_js_error)?.clear();
        Ok(())
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.board.clear_all();
    }

    /// Template the board from a row-major array of givens (`null` for blanks)
    #[wasm_bindgen(js_name = loadGivens)]
    pub fn load_givens(&mut self, givens: JsValue) -> Result<(), JsValue> {
        let givens: Vec<Option<String>> = serde_wasm_bindgen::from_value(givens).map_err(|err| {
            JsGridmarkError::new("INVALID_GIVENS", err.to_string()).into_js()
        })?;
        self.board.load_givens(&givens).map_err(to_js_error)
    }

    // =========================================================================
    // Pointer protocol
    // =========================================================================

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, button: u8, row: i32, col: i32) -> bool {
        let changed = self.board.pointer_down(PointerButton(button), row, col);

        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        web_sys::console::log_1(
            &format!("[Selection] pointer down {button} at ({row}, {col}): {changed}").into(),
        );

        changed
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, row: i32, col: i32) -> bool {
        self.board.pointer_move(row, col)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, button: u8) -> bool {
        let ended = self.board.pointer_up(PointerButton(button));

        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        if ended {
            web_sys::console::log_1(
                &format!(
                    "[Selection] gesture ended with {} cells",
                    self.board.selection().len()
                )
                .into(),
            );
        }

        ended
    }

    /// Whether the host should keep forwarding move/up events
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.board.selection().is_dragging()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, row: i32, col: i32) -> bool {
        self.board.is_selected(row, col)
    }

    /// Selected coordinates as a flat `[r0, c0, r1, c1, ...]` array
    #[wasm_bindgen(js_name = selectedCells)]
    pub fn selected_cells(&self) -> Vec<u32> {
        flatten_coords(self.board.selection().iter())
    }

    #[wasm_bindgen(js_name = select)]
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        self.board.select(row, col)
    }

    #[wasm_bindgen(js_name = deselect)]
    pub fn deselect(&mut self, row: i32, col: i32) -> bool {
        self.board.deselect(row, col)
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.board.clear_selection();
    }

    /// Apply a JSON editor command to the selection.
    /// Returns the changed coordinates as a flat `[r0, c0, ...]` array.
    #[wasm_bindgen(js_name = applyToSelection)]
    pub fn apply_to_selection(&mut self, action_json: &str) -> Result<Vec<u32>, JsValue> {
        let action = parse_action(action_json).map_err(JsGridmarkError::into_js)?;
        Ok(flatten_coords(self.board.apply(action)))
    }

    // =========================================================================
    // Zero-Copy Board Snapshot
    // =========================================================================

    /// Refill the snapshot buffer. Call before reading the buffer arrays.
    #[wasm_bindgen(js_name = populateBuffer)]
    pub fn populate_buffer(&mut self) {
        self.buffer.populate(&self.board);
    }

    #[wasm_bindgen(js_name = getBufferLen)]
    pub fn get_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Get pointer to packed cell flags (Uint32Array)
    #[wasm_bindgen(js_name = getBufferFlagsPtr)]
    pub fn get_buffer_flags_ptr(&self) -> *const u32 {
        self.buffer.flags.as_ptr()
    }

    /// Get cell values as JSON (strings still need serialization)
    #[wasm_bindgen(js_name = getBufferValues)]
    pub fn get_buffer_values(&self) -> String {
        serde_json::to_string(&self.buffer.values).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get first colour per cell as JSON
    #[wasm_bindgen(js_name = getBufferColours)]
    pub fn get_buffer_colours(&self) -> String {
        serde_json::to_string(&self.buffer.colours).unwrap_or_else(|_| "[]".to_string())
    }
}

impl GridmarkEngine {
    fn with_board(board: Board) -> Self {
        let capacity = board.grid().len();
        Self {
            board,
            buffer: BoardBuffer::with_capacity(capacity),
        }
    }

    fn cell_data(&self, row: i32, col: i32) -> Result<CellData, GridError> {
        let grid = self.board.grid();
        let coord = grid.position(row, col)?;
        let cell = grid.get_cell(row, col)?;
        Ok(CellData::from_cell(
            coord,
            cell,
            self.board.selection().contains_coord(coord),
        ))
    }
}

impl Default for GridmarkEngine {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}
