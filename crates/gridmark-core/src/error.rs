use thiserror::Error;

/// Addressing failures raised by [`Grid`](crate::grid::Grid) accessors.
///
/// Redundant commands (writing a fixed cell, re-selecting a selected cell,
/// toggling a mark back) are never errors; only structurally invalid
/// addresses are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside `[0, height) x [0, width)`
    #[error("position ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        width: u32,
        height: u32,
    },

    #[error("row {row} is outside a grid of height {height}")]
    RowOutOfBounds { row: i64, height: u32 },

    #[error("column {col} is outside a grid of width {width}")]
    ColumnOutOfBounds { col: i64, width: u32 },
}

impl GridError {
    /// Stable machine-readable code, used by the bindings layer
    pub fn code(&self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. }
            | GridError::RowOutOfBounds { .. }
            | GridError::ColumnOutOfBounds { .. } => "OUT_OF_BOUNDS",
        }
    }
}

/// Errors raised while loading a [`BoardConfig`](crate::config::BoardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "board dimensions must be between 1 and {max}, got {width}x{height}",
        max = crate::grid::MAX_DIMENSION
    )]
    InvalidDimensions { width: u32, height: u32 },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Parse(_) => "CONFIG_PARSE",
            ConfigError::InvalidDimensions { .. } => "CONFIG_DIMENSIONS",
        }
    }
}
