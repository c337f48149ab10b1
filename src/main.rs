use anyhow::{Context, Result};
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;
use snake_tui::settings::{ColorChoice, Difficulty, Settings};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// JSON game configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Initial snake length
    #[arg(long)]
    initial_length: Option<usize>,

    /// Points awarded per food eaten
    #[arg(long)]
    points_per_food: Option<u32>,

    /// Game speed
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// Snake color
    #[arg(long, value_enum, default_value = "green")]
    snake_color: ColorChoice,

    /// Food color
    #[arg(long, value_enum, default_value = "red")]
    food_color: ColorChoice,

    /// Write logs to this file (the terminal is taken by the game).
    /// Filter with RUST_LOG, default "info".
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file if one was given, then apply flag overrides
    fn game_config(&self) -> Result<GameConfig> {
        let config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(length) = self.initial_length {
            config.initial_snake_length = length;
        }
        if let Some(points) = self.points_per_food {
            config.points_per_food = points;
        }

        config
    }

    fn settings(&self) -> Settings {
        Settings {
            difficulty: self.difficulty,
            snake_color: self.snake_color,
            food_color: self.food_color,
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, "starting snake");

    let mut human_mode = HumanMode::new(config, cli.settings())?;
    human_mode.run().await?;

    Ok(())
}
