use anyhow::Result;
use rand::Rng;

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{GameState, GameStatus, Position, Snake},
};

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the board.
    Wall,
    /// Head re-entered an occupied cell.
    SelfHit,
}

/// What a single tick did, for drivers and metrics. A tick issued while the
/// game is over reports nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The head landed on the food this tick.
    pub ate_food: bool,
    /// The collision that ended the game, if one occurred this tick.
    pub collision: Option<CollisionKind>,
}

/// Owns the full game state and advances it one discrete step at a time.
///
/// All mutation goes through [`tick`](GameEngine::tick) and
/// [`reset`](GameEngine::reset); [`state`](GameEngine::state) hands out a
/// read-only view for rendering.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Builds an engine over a validated board and deals the opening state.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let snake = Snake::new(
            config.center_cell(),
            Direction::Right,
            config.initial_snake_length,
            config.cell_size,
        );
        let state = GameState::new(snake, Position::new(0, 0), &config);

        let mut engine = Self {
            config,
            state,
            rng: rand::thread_rng(),
        };
        engine.reset();
        Ok(engine)
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the game to its opening position: a fresh snake at the board
    /// center heading right, food somewhere free, score zero, running.
    /// Legal from any state.
    pub fn reset(&mut self) {
        self.state.snake = Snake::new(
            self.config.center_cell(),
            Direction::Right,
            self.config.initial_snake_length,
            self.config.cell_size,
        );
        self.state.score = 0;
        self.state.status = GameStatus::Running;

        // A validated config always leaves a free cell at the initial length.
        if let Some(cell) = self.free_cell() {
            self.state.food = cell;
        } else {
            self.state.status = GameStatus::GameOver;
        }
    }

    /// Advances the game by exactly one step. A no-op once the game is over;
    /// call [`reset`](GameEngine::reset) to play again.
    pub fn tick(&mut self, action: Action) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.state.status == GameStatus::GameOver {
            return outcome;
        }

        // Steering: reversals are ignored, Continue keeps the heading.
        if let Action::Move(direction) = action {
            if !self.state.snake.direction.is_opposite(direction) {
                self.state.snake.direction = direction;
            }
        }

        self.state.snake.advance(self.config.cell_size);

        if self.state.snake.head() == self.state.food {
            // Growth lands on the next advance; the score does not wait.
            self.state.snake.pending_growth = true;
            self.state.score += self.config.food_score;
            outcome.ate_food = true;

            match self.free_cell() {
                Some(cell) => self.state.food = cell,
                // Every cell occupied: nothing left to place or eat.
                None => self.state.status = GameStatus::GameOver,
            }
        }

        if let Some(kind) = self.check_collision() {
            self.state.status = GameStatus::GameOver;
            outcome.collision = Some(kind);
        }

        outcome
    }

    /// Collision test against the post-move body.
    fn check_collision(&self) -> Option<CollisionKind> {
        if !self.state.in_bounds(self.state.snake.head()) {
            return Some(CollisionKind::Wall);
        }
        if self.state.snake.hits_itself() {
            return Some(CollisionKind::SelfHit);
        }
        None
    }

    /// Picks a cell the snake does not occupy: random draws bounded by the
    /// board size, then a scan in row order. `None` only on a full board.
    fn free_cell(&mut self) -> Option<Position> {
        let cell = self.config.cell_size;
        let (cols, rows) = (self.config.cells_x(), self.config.cells_y());

        for _ in 0..self.config.cell_count() {
            let pos = Position::new(
                self.rng.gen_range(0..cols) * cell,
                self.rng.gen_range(0..rows) * cell,
            );
            if !self.state.snake.occupies(pos) {
                return Some(pos);
            }
        }

        let snake = &self.state.snake;
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Position::new(col * cell, row * cell)))
            .find(|pos| !snake.occupies(*pos))
    }
}
