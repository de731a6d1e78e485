use serde::Serialize;
use std::collections::BTreeSet;

use crate::coord::{CellIndex, Coord};
use crate::state::input::PointerButton;
use crate::state::listener::{ListenerHandle, PointerListeners};

/// Drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    /// No gesture in progress
    Idle,
    /// A gesture started by `button` is in progress
    Dragging { button: PointerButton },
}

/// An in-progress gesture. Dropping it releases its listener.
#[derive(Debug)]
struct Gesture {
    button: PointerButton,
    _listener: ListenerHandle,
}

/// The set of selected cells of one board plus the drag protocol that builds it.
///
/// Members are kept as [`CellIndex`] keys and are always inside the board.
/// Coordinates outside the board are silently ignored by every mutator; the
/// pointer-translation layer may legitimately report them while the pointer
/// is off the board mid-drag.
#[derive(Debug)]
pub struct Selection {
    width: u32,
    height: u32,
    selected: BTreeSet<CellIndex>,
    gesture: Option<Gesture>,
}

impl Selection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            selected: BTreeSet::new(),
            gesture: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Add a cell; returns whether the selection changed
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        match self.checked(row, col) {
            Some(coord) => self.select_coord(coord),
            None => false,
        }
    }

    /// Remove a cell; returns whether the selection changed
    pub fn deselect(&mut self, row: i32, col: i32) -> bool {
        match self.checked(row, col) {
            Some(coord) => self.deselect_coord(coord),
            None => false,
        }
    }

    pub fn select_coord(&mut self, coord: Coord) -> bool {
        if !coord.is_valid(self.width, self.height) {
            tracing::debug!(%coord, "ignoring out-of-bounds selection");
            return false;
        }
        self.selected.insert(coord.index())
    }

    pub fn deselect_coord(&mut self, coord: Coord) -> bool {
        self.selected.remove(&coord.index())
    }

    /// Empty the selection without touching the drag state
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.checked(row, col)
            .is_some_and(|coord| self.contains_coord(coord))
    }

    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.selected.contains(&coord.index())
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.selected.iter().map(|index| index.decode())
    }

    pub fn drag_state(&self) -> DragState {
        match &self.gesture {
            Some(gesture) => DragState::Dragging {
                button: gesture.button,
            },
            None => DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Begin a drag gesture at `(row, col)`.
    ///
    /// Clears the selection, selects the origin and subscribes to move and
    /// release events until the matching release. A gesture that is still
    /// running is ended first. An origin outside the board is ignored and
    /// leaves all state untouched.
    ///
    /// Only the owning [`Board`](crate::state::Board) starts gestures, so the
    /// subscription always lives in the table it routes events from.
    pub(crate) fn start_selection(
        &mut self,
        button: PointerButton,
        row: i32,
        col: i32,
        listeners: &PointerListeners,
    ) -> bool {
        let Some(origin) = self.checked(row, col) else {
            tracing::debug!(row, col, "ignoring gesture start outside the board");
            return false;
        };

        if let Some(stale) = self.gesture.take() {
            tracing::debug!(button = stale.button.0, "restarting unfinished gesture");
        }

        self.selected.clear();
        self.selected.insert(origin.index());
        self.gesture = Some(Gesture {
            button,
            _listener: listeners.subscribe(),
        });
        tracing::debug!(button = button.0, %origin, "gesture started");
        true
    }

    /// Extend the running gesture to `(row, col)`.
    ///
    /// Ignored when idle or when the coordinate is off the board.
    pub fn pointer_move(&mut self, row: i32, col: i32) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        let changed = self.select(row, col);
        if changed {
            tracing::trace!(row, col, "gesture extended");
        }
        changed
    }

    /// End the gesture if `button` started it; returns whether it ended
    pub fn pointer_up(&mut self, button: PointerButton) -> bool {
        let matches = self
            .gesture
            .as_ref()
            .is_some_and(|gesture| gesture.button == button);
        matches && self.end_gesture()
    }

    /// Drop the running gesture (and its listener) without a release event
    pub fn end_gesture(&mut self) -> bool {
        match self.gesture.take() {
            Some(gesture) => {
                tracing::debug!(
                    button = gesture.button.0,
                    selected = self.selected.len(),
                    "gesture ended"
                );
                true
            }
            None => false,
        }
    }

    fn checked(&self, row: i32, col: i32) -> Option<Coord> {
        let coord = Coord::new(u32::try_from(row).ok()?, u32::try_from(col).ok()?);
        coord.is_valid(self.width, self.height).then_some(coord)
    }
}
