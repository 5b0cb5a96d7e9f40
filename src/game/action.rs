use serde::{Deserialize, Serialize};

/// One of the four headings the snake can travel in.
///
/// Coordinates are screen-space: the origin is the top-left corner of the
/// board, so `Down` increases `y` and `Up` decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The heading pointing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if switching from `self` to `other` would be a
    /// 180-degree reversal.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit cell offset `(dx, dy)` for this heading, screen-space.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Label for status lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// Steering input for one game tick.
///
/// `Continue` is the "no command" case: an absent pointer, a pointer resting
/// near the frame center, or simply no key pressed. The snake keeps its
/// current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Steer toward a specific heading.
    Move(Direction),
    /// Keep the current heading.
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        match direction {
            Some(direction) => Action::Move(direction),
            None => Action::Continue,
        }
    }
}
