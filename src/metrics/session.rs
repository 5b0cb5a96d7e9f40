use std::time::{Duration, Instant};

/// Counters for one play session, across any number of games.
pub struct SessionMetrics {
    game_started: Instant,
    elapsed: Duration,
    pub games_played: u32,
    pub foods_eaten: u32,
    pub high_score: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
            foods_eaten: 0,
            high_score: 0,
        }
    }

    /// Refreshes the elapsed clock; called from the render loop.
    pub fn update(&mut self) {
        self.elapsed = self.game_started.elapsed();
    }

    /// A new game began; the clock restarts.
    pub fn on_reset(&mut self) {
        self.game_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_food(&mut self) {
        self.foods_eaten += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Elapsed game time as `MM:SS`.
    pub fn format_elapsed(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
