use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::grid::Grid;

/// Smallest accepted grid side
pub const MIN_GRID_SIDE: usize = 2;

/// Largest accepted grid side. Cells are addressed with `i32` coordinates.
pub const MAX_GRID_SIDE: usize = 1000;

/// Errors raised while loading or checking a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("grid must be at most {max}x{max} cells, got {width}x{height}")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("initial snake length must be at least 1")]
    EmptySnake,

    #[error("initial snake length {length} does not fit behind the head (max {max})")]
    SnakeTooLong { length: usize, max: usize },

    #[error("no free cell left for food on a {width}x{height} grid")]
    NoRoomForFood { width: usize, height: usize },

    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points added to the score for each food eaten
    pub points_per_food: u32,
}

impl Default for GameConfig {
    /// Sized so the board fits a standard 80x24 terminal
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 16,
            initial_snake_length: 1,
            points_per_food: 1,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(60, 40)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that a game can be started with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID_SIDE || self.grid_height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_SIDE,
            });
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIDE,
            });
        }

        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        // The head starts in the center and the body trails off to the left
        let max = self.grid_width / 2 + 1;
        if self.initial_snake_length > max {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                max,
            });
        }

        Ok(())
    }
}
