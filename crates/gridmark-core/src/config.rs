use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
use crate::state::PointerButton;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Button hosts should treat as the selecting button
    pub primary_button: PointerButton,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            primary_button: PointerButton::PRIMARY,
        }
    }
}

impl BoardConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Load and validate a configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |dim: u32| (1..=MAX_DIMENSION).contains(&dim);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
