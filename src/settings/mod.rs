//! Player-facing options: game speed and colors
//!
//! These only affect presentation. The tick interval picked by a
//! [`Difficulty`] drives the human-mode timer, never the game rules.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Game speed settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    /// 10 ticks per second
    Easy,
    /// 15 ticks per second
    #[default]
    Medium,
    /// 30 ticks per second
    Hard,
    /// 60 ticks per second
    VeryHard,
    /// 120 ticks per second
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Extreme,
    ];

    pub fn ticks_per_second(&self) -> u64 {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 30,
            Self::VeryHard => 60,
            Self::Extreme => 120,
        }
    }

    /// Get the tick interval for this difficulty
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.ticks_per_second())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Extreme => "Extreme",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// Colors offered for the snake and the food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ColorChoice {
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
    Orange,
    Red,
    White,
}

impl ColorChoice {
    pub const SNAKE_PALETTE: [ColorChoice; 6] = [
        ColorChoice::Green,
        ColorChoice::Blue,
        ColorChoice::Yellow,
        ColorChoice::Purple,
        ColorChoice::Cyan,
        ColorChoice::Orange,
    ];

    pub const FOOD_PALETTE: [ColorChoice; 6] = [
        ColorChoice::Red,
        ColorChoice::Orange,
        ColorChoice::Yellow,
        ColorChoice::Purple,
        ColorChoice::Cyan,
        ColorChoice::White,
    ];

    /// RGB triple, matching the classic palette
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::Purple => (128, 0, 128),
            Self::Cyan => (0, 255, 255),
            Self::Orange => (255, 165, 0),
            Self::Red => (255, 0, 0),
            Self::White => (255, 255, 255),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
            Self::Cyan => "Cyan",
            Self::Orange => "Orange",
            Self::Red => "Red",
            Self::White => "White",
        }
    }
}

/// Current player options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub snake_color: ColorChoice,
    pub food_color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            snake_color: ColorChoice::Green,
            food_color: ColorChoice::Red,
        }
    }
}

impl Settings {
    pub fn next_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
    }

    pub fn prev_difficulty(&mut self) {
        self.difficulty = self.difficulty.prev();
    }

    pub fn next_snake_color(&mut self) {
        self.snake_color = cycle(&ColorChoice::SNAKE_PALETTE, self.snake_color, 1);
    }

    pub fn prev_snake_color(&mut self) {
        let palette = &ColorChoice::SNAKE_PALETTE;
        self.snake_color = cycle(palette, self.snake_color, palette.len() - 1);
    }

    pub fn next_food_color(&mut self) {
        self.food_color = cycle(&ColorChoice::FOOD_PALETTE, self.food_color, 1);
    }

    pub fn prev_food_color(&mut self) {
        let palette = &ColorChoice::FOOD_PALETTE;
        self.food_color = cycle(palette, self.food_color, palette.len() - 1);
    }
}

/// Step `steps` places forward through `items`, wrapping. A value missing
/// from `items` restarts at the first entry.
fn cycle<T: Copy + PartialEq>(items: &[T], current: T, steps: usize) -> T {
    match items.iter().position(|item| *item == current) {
        Some(index) => items[(index + steps) % items.len()],
        None => items[0],
    }
}
