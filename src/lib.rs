//! Snake TUI - the classic Snake game in the terminal
//!
//! This library provides:
//! - Core game logic, free of I/O (game module)
//! - Player options and menus (settings, menu modules)
//! - TUI rendering and key mapping (render, input modules)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod menu;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod settings;
