use std::time::Duration;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::state::Position;

/// Board and pacing parameters. Values only; changing them between games has
/// no side effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in pixels, a multiple of `cell_size`.
    pub board_width: i32,
    /// Board height in pixels, a multiple of `cell_size`.
    pub board_height: i32,
    /// Edge length of one grid cell, in pixels.
    pub cell_size: i32,
    /// Snake length right after a reset.
    pub initial_snake_length: usize,
    /// Points awarded per food eaten.
    pub food_score: u32,
    /// Game ticks per second.
    pub tick_hz: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 640,
            board_height: 480,
            cell_size: 20,
            initial_snake_length: 1,
            food_score: 10,
            tick_hz: 10,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom board, everything else default.
    pub fn new(board_width: i32, board_height: i32, cell_size: i32) -> Self {
        Self {
            board_width,
            board_height,
            cell_size,
            ..Default::default()
        }
    }

    /// A tiny board for tests.
    pub fn small() -> Self {
        Self::new(200, 200, 20)
    }

    /// Checks the geometry invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.board_width > 0 && self.board_height > 0,
            "board must have positive extent"
        );
        ensure!(
            self.board_width % self.cell_size == 0 && self.board_height % self.cell_size == 0,
            "board {}x{} is not a whole number of {}px cells",
            self.board_width,
            self.board_height,
            self.cell_size
        );
        ensure!(self.initial_snake_length >= 1, "snake needs at least one cell");
        ensure!(
            self.initial_snake_length as i32 <= self.cells_x() / 2 + 1,
            "initial snake of {} cells does not fit between the board center and the left edge",
            self.initial_snake_length
        );
        ensure!(self.tick_hz > 0, "tick rate must be positive");
        Ok(())
    }

    /// Number of cell columns.
    pub fn cells_x(&self) -> i32 {
        self.board_width / self.cell_size
    }

    /// Number of cell rows.
    pub fn cells_y(&self) -> i32 {
        self.board_height / self.cell_size
    }

    /// Total cell count of the board.
    pub fn cell_count(&self) -> i32 {
        self.cells_x() * self.cells_y()
    }

    /// Cell-aligned board center, where the snake starts.
    pub fn center_cell(&self) -> Position {
        Position::new(
            self.cells_x() / 2 * self.cell_size,
            self.cells_y() / 2 * self.cell_size,
        )
    }

    /// Wall-clock duration of one game tick, never zero.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis((1000 / self.tick_hz).max(1))
    }
}
