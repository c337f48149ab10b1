//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The presentation layer feeds it [`GameInput`]s, calls [`GameEngine::tick`] on a
//! fixed schedule and draws the resulting [`Snapshot`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, GameInput};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickResult};
pub use food::Food;
pub use grid::Grid;
pub use snake::Snake;
pub use state::{GameOverReason, GameState, Position, Snapshot};
