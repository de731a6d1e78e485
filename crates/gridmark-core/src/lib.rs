pub mod annotations;
pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod state;

pub use annotations::{Annotations, MarkKind};
pub use cell::Cell;
pub use config::BoardConfig;
pub use coord::{CellIndex, Coord, CoordIter};
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use state::{
    Board, DragState, EditAction, ListenerHandle, PointerButton, PointerEvent, PointerListeners,
    Selection,
};
