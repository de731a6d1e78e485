use serde::{Deserialize, Serialize};

use crate::annotations::MarkKind;

/// Pointer button that started a gesture (0 = primary, 1 = middle, 2 = secondary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerButton(pub u8);

impl PointerButton {
    pub const PRIMARY: PointerButton = PointerButton(0);
    pub const MIDDLE: PointerButton = PointerButton(1);
    pub const SECONDARY: PointerButton = PointerButton(2);
}

impl From<u8> for PointerButton {
    fn from(button: u8) -> Self {
        PointerButton(button)
    }
}

/// Coordinate-level pointer events delivered by the presentation layer.
///
/// Raw platform events are translated into these before they reach the
/// core; rows and columns may lie outside the board when the pointer has
/// left it mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    Down { button: PointerButton, row: i32, col: i32 },
    Move { row: i32, col: i32 },
    Up { button: PointerButton },
}

/// Editor commands applied to the current selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "camelCase")]
pub enum EditAction {
    /// Enter a value in every selected modifiable cell
    SetValue(String),
    /// Toggle a mark of one category in every selected cell
    ToggleMark(MarkKind, String),
    /// Clear every selected cell
    ClearCells,
    /// Empty the selection
    ClearSelection,
    /// Clear the whole board
    ClearAll,
}

/// Check if an event is only meaningful while a gesture is in progress
pub fn is_gesture_event(event: &PointerEvent) -> bool {
    matches!(event, PointerEvent::Move { .. } | PointerEvent::Up { .. })
}

/// Check if an action can change cell contents
pub fn is_cell_action(action: &EditAction) -> bool {
    matches!(
        action,
        EditAction::SetValue(_)
            | EditAction::ToggleMark(..)
            | EditAction::ClearCells
            | EditAction::ClearAll
    )
}
