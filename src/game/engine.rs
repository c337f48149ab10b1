use rand::{rngs::ThreadRng, Rng};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::{
    action::{Direction, GameInput},
    config::{ConfigError, GameConfig},
    food::Food,
    grid::Grid,
    snake::Snake,
    state::{GameOverReason, GameState, Position, Snapshot},
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set on the tick that ended the game
    pub game_over: Option<GameOverReason>,
    /// Whether a buffered restart started a new game
    pub restarted: bool,
}

/// The game loop core: owns one snake, one food, the score and the state
/// machine, and advances them one tick at a time.
///
/// Input is buffered with [`GameEngine::push_input`] and only applied at the
/// start of the next [`GameEngine::tick`]. The random source is a type
/// parameter so tests can drive food placement with a seeded generator.
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    game_over_reason: Option<GameOverReason>,
    ticks: u32,
    pending_direction: Option<Direction>,
    restart_requested: bool,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine that draws food positions from `rng`
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let snake = initial_snake(&config);
        let food = spawn_food(&snake, &grid, &mut rng).ok_or(ConfigError::NoRoomForFood {
            width: grid.width,
            height: grid.height,
        })?;

        Ok(Self::from_parts(config, rng, snake, food))
    }

    /// Start from a hand-placed snake and food. The configuration is used for
    /// scoring and for restarts; it is not validated against the placement.
    pub fn from_parts(config: GameConfig, rng: R, snake: Snake, food: Food) -> Self {
        Self {
            grid: config.grid(),
            config,
            rng,
            snake,
            food,
            score: 0,
            state: GameState::Running,
            game_over_reason: None,
            ticks: 0,
            pending_direction: None,
            restart_requested: false,
        }
    }

    /// Buffer an input for the next tick. The latest direction wins; turns
    /// arriving after the game is over are dropped.
    pub fn push_input(&mut self, input: GameInput) {
        match input {
            GameInput::Turn(direction) => {
                if self.state == GameState::Running {
                    self.pending_direction = Some(direction);
                }
            }
            GameInput::Restart => self.restart_requested = true,
        }
    }

    /// Execute one step of the game
    pub fn tick(&mut self) -> TickResult {
        let direction = self.pending_direction.take();
        let restart = std::mem::take(&mut self.restart_requested);

        if self.state == GameState::GameOver {
            if restart {
                self.restart();
                return TickResult {
                    restarted: true,
                    ..TickResult::default()
                };
            }
            return TickResult::default();
        }

        if let Some(direction) = direction {
            self.snake.set_direction(direction);
        }

        // Grow on the same advance that reaches the food
        let ate_food = self.snake.next_head() == self.food.position();
        if ate_food {
            self.snake.grow();
        }

        self.snake.advance();
        self.ticks = self.ticks.saturating_add(1);

        let head = self.snake.head();
        if !self.grid.contains(head) {
            return self.end_game(GameOverReason::Wall);
        }
        if self.snake.check_self_collision() {
            return self.end_game(GameOverReason::SelfCollision);
        }

        if ate_food {
            self.score = self.score.saturating_add(self.config.points_per_food);
            let occupied: HashSet<Position> = self.snake.segments().iter().copied().collect();

            match self.food.respawn(&occupied, &self.grid, &mut self.rng) {
                Some(food) => {
                    debug!(score = self.score, length = self.snake.len(), ?food, "food eaten");
                }
                None => {
                    warn!(length = self.snake.len(), "no free cell left for food");
                    let mut result = self.end_game(GameOverReason::BoardFilled);
                    result.ate_food = true;
                    return result;
                }
            }
        }

        TickResult {
            ate_food,
            ..TickResult::default()
        }
    }

    /// Reset snake, food and score and start running again
    pub fn restart(&mut self) {
        self.snake = initial_snake(&self.config);
        // A validated config always leaves room; keep the old food otherwise
        if let Some(food) = spawn_food(&self.snake, &self.grid, &mut self.rng) {
            self.food = food;
        }
        self.score = 0;
        self.ticks = 0;
        self.state = GameState::Running;
        self.game_over_reason = None;
        self.pending_direction = None;
        self.restart_requested = false;
        info!("game restarted");
    }

    fn end_game(&mut self, reason: GameOverReason) -> TickResult {
        self.state = GameState::GameOver;
        self.game_over_reason = Some(reason);
        info!(
            reason = reason.as_str(),
            score = self.score,
            length = self.snake.len(),
            ticks = self.ticks,
            "game over"
        );
        TickResult {
            game_over: Some(reason),
            ..TickResult::default()
        }
    }
}

impl<R> GameEngine<R> {
    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: self.snake.segments(),
            direction: self.snake.direction(),
            food: self.food.position(),
            score: self.score,
            state: self.state,
            game_over_reason: self.game_over_reason,
            ticks: self.ticks,
            grid: self.grid,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }
}

/// Snake centered on the grid, heading right
fn initial_snake(config: &GameConfig) -> Snake {
    Snake::new(
        config.grid().center(),
        Direction::Right,
        config.initial_snake_length,
    )
}

fn spawn_food<R: Rng>(snake: &Snake, grid: &Grid, rng: &mut R) -> Option<Food> {
    let occupied: HashSet<Position> = snake.segments().iter().copied().collect();
    Food::spawn(&occupied, grid, rng)
}
