use std::time::{Duration, Instant};
use tracing::info;

/// Per-session stats kept in memory for the header line
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub best_length: usize,
    pub games_played: u32,
    /// The clock stops while a finished game is on screen
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            best_length: 0,
            games_played: 0,
            running: true,
        }
    }

    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_game_over(&mut self, final_score: u32, final_length: usize) {
        self.update();
        self.running = false;
        self.games_played += 1;
        self.best_length = self.best_length.max(final_length);
        if final_score > self.high_score {
            self.high_score = final_score;
            info!(high_score = final_score, "new high score");
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
