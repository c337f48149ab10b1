use super::action::Direction;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Whether a game is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// No free cell was left for food
    BoardFilled,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wall => "hit the wall",
            Self::SelfCollision => "ran into itself",
            Self::BoardFilled => "filled the board",
        }
    }
}

/// Read-only view of the game handed to the presentation layer each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    /// Snake body, head first
    pub segments: &'a [Position],
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub state: GameState,
    pub game_over_reason: Option<GameOverReason>,
    pub ticks: u32,
    pub grid: Grid,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }
}
