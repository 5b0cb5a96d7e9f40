use super::action::Direction;
use super::config::GameConfig;

/// A cell-aligned position on the board, in pixel coordinates.
///
/// Both components are multiples of the board's cell size while the game is
/// running; a head that has just crashed through a wall may hold an
/// out-of-board value for the final, terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a raw pixel offset.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position one cell away in the given heading.
    pub fn step(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx * cell_size, dy * cell_size)
    }

    /// Grid cell index `(column, row)` of this position.
    pub fn cell_index(&self, cell_size: i32) -> (i32, i32) {
        (self.x / cell_size, self.y / cell_size)
    }
}

/// The snake: an ordered run of cells, head first.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at index 0, tail last. Never empty.
    pub body: Vec<Position>,
    /// Heading the next advance will follow.
    pub direction: Direction,
    /// Set when food was just eaten; the next advance keeps the tail and
    /// clears the flag, so growth lands one tick after the bite.
    pub pending_growth: bool,
}

impl Snake {
    /// Builds a snake with its head at `head` and `length - 1` trailing
    /// segments laid out opposite the starting heading.
    pub fn new(head: Position, direction: Direction, length: usize, cell_size: i32) -> Self {
        let mut body = vec![head];
        let (dx, dy) = direction.opposite().delta();

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.offset(dx * cell_size, dy * cell_size));
        }

        Self {
            body,
            direction,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True if any body cell (head included) sits on `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// True if the head overlaps any other body cell.
    pub fn hits_itself(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// Advances one cell in the current heading: the new head is prepended
    /// and the tail is dropped unless growth is pending.
    pub fn advance(&mut self, cell_size: i32) {
        let new_head = self.head().step(self.direction, cell_size);
        self.body.insert(0, new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
    }
}

/// Whether the game is still accepting ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Full game state. Owned by the engine; callers read it through
/// `GameEngine::state` and mutate it only via `tick` and `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            board_width: config.board_width,
            board_height: config.board_height,
            cell_size: config.cell_size,
            score: 0,
            status: GameStatus::Running,
        }
    }

    /// True while `pos` lies inside `[0, W) x [0, H)`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_width && pos.y >= 0 && pos.y < self.board_height
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
