use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::game::{Direction, GameConfig, GameEngine, GameInput, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::menu::{MainMenuItem, Menu, OptionsItem, Screen};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::settings::{Difficulty, Settings};

/// Render at ~30 FPS regardless of game speed
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    engine: GameEngine,
    settings: Settings,
    screen: Screen,
    main_menu: Menu<MainMenuItem>,
    options_menu: Menu<OptionsItem>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    /// Build the mode, starting on the main menu. Fails if `config` cannot
    /// host a game.
    pub fn new(config: GameConfig, settings: Settings) -> Result<Self> {
        let engine = GameEngine::new(config).context("Invalid game configuration")?;

        Ok(Self {
            engine,
            settings,
            screen: Screen::MainMenu,
            main_menu: Menu::new(&MainMenuItem::ALL),
            options_menu: Menu::new(&OptionsItem::ALL),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut speed = self.settings.difficulty;
        let mut tick_timer = new_tick_timer(speed);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.screen == Screen::Playing {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| self.draw(frame)).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            // Difficulty may have changed on the options screen
            if self.settings.difficulty != speed {
                speed = self.settings.difficulty;
                tick_timer = new_tick_timer(speed);
                debug!(difficulty = speed.as_str(), "tick rate changed");
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.screen {
            Screen::MainMenu => self.renderer.render_main_menu(frame, &self.main_menu),
            Screen::Options => {
                self.renderer
                    .render_options(frame, &self.options_menu, &self.settings)
            }
            Screen::Playing => self.renderer.render_game(
                frame,
                &self.engine.snapshot(),
                &self.settings,
                &self.metrics,
            ),
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::MainMenu => self.handle_main_menu(action),
            Screen::Options => self.handle_options(action),
            Screen::Playing => self.handle_game(action),
        }
    }

    fn handle_main_menu(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(Direction::Up) => self.main_menu.up(),
            KeyAction::Move(Direction::Down) => self.main_menu.down(),
            KeyAction::Confirm => match self.main_menu.selected() {
                MainMenuItem::Play => self.start_game(),
                MainMenuItem::Options => {
                    self.options_menu.reset();
                    self.screen = Screen::Options;
                }
                MainMenuItem::Quit => self.should_quit = true,
            },
            KeyAction::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_options(&mut self, action: KeyAction) {
        let item = self.options_menu.selected();

        match action {
            KeyAction::Move(Direction::Up) => self.options_menu.up(),
            KeyAction::Move(Direction::Down) => self.options_menu.down(),
            KeyAction::Move(Direction::Left) => match item {
                OptionsItem::Difficulty => self.settings.prev_difficulty(),
                OptionsItem::SnakeColor => self.settings.prev_snake_color(),
                OptionsItem::FoodColor => self.settings.prev_food_color(),
                OptionsItem::Back => {}
            },
            KeyAction::Move(Direction::Right) => match item {
                OptionsItem::Difficulty => self.settings.next_difficulty(),
                OptionsItem::SnakeColor => self.settings.next_snake_color(),
                OptionsItem::FoodColor => self.settings.next_food_color(),
                OptionsItem::Back => {}
            },
            KeyAction::Confirm if item == OptionsItem::Back => self.open_main_menu(),
            KeyAction::Back => self.open_main_menu(),
            _ => {}
        }
    }

    fn handle_game(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(direction) => self.engine.push_input(GameInput::Turn(direction)),
            KeyAction::Restart => self.engine.push_input(GameInput::Restart),
            KeyAction::Menu if self.engine.state() == GameState::GameOver => {
                self.open_main_menu()
            }
            KeyAction::Back => self.open_main_menu(),
            _ => {}
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.tick();

        if result.restarted {
            self.metrics.on_game_start();
        }

        // Track game over
        if result.game_over.is_some() {
            self.metrics
                .on_game_over(self.engine.score(), self.engine.snake().len());
        }
    }

    fn start_game(&mut self) {
        self.engine.restart();
        self.metrics.on_game_start();
        self.screen = Screen::Playing;
        info!(difficulty = self.settings.difficulty.as_str(), "game started");
    }

    fn open_main_menu(&mut self) {
        self.main_menu.reset();
        self.screen = Screen::MainMenu;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn new_tick_timer(difficulty: Difficulty) -> Interval {
    let mut timer = interval(difficulty.tick_interval());
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}
