//! Maps a normalized 2-D pointer position onto a discrete steering command.
//!
//! The pointer can be anything that yields coordinates in `[0,1]x[0,1]` once
//! per sample: a tracked hand, a mouse, a touch. The mapper is a pure
//! function of one sample; it keeps no history.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::game::{Action, Direction};

/// Minimum offset from the frame center, as a fraction of the frame extent,
/// before a sample counts as a command.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Pointer-mapping parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Dead-zone radius around the frame center, per axis.
    pub threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Turns one pointer sample into a steering command.
///
/// `None` (no pointer seen this sample) maps to [`Action::Continue`]. A
/// present sample must be normalized to `[0,1]` on both axes; anything else
/// is a caller bug and fails fast rather than being clamped.
///
/// Only the axis with the larger center offset is considered, and only an
/// offset strictly beyond `threshold` emits a command; an exact tie between
/// the axes is decided on the vertical one.
pub fn map_position(position: Option<(f64, f64)>, threshold: f64) -> Result<Action> {
    let Some((x, y)) = position else {
        return Ok(Action::Continue);
    };
    ensure!(
        (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y),
        "pointer position ({x}, {y}) is outside the unit square"
    );

    let rel_x = x - 0.5;
    let rel_y = y - 0.5;

    let action = if rel_x.abs() > rel_y.abs() {
        if rel_x > threshold {
            Direction::Right.into()
        } else if rel_x < -threshold {
            Direction::Left.into()
        } else {
            Action::Continue
        }
    } else if rel_y > threshold {
        Direction::Down.into()
    } else if rel_y < -threshold {
        Direction::Up.into()
    } else {
        Action::Continue
    };

    Ok(action)
}

/// Normalizes a terminal mouse coordinate to the unit square, given the
/// terminal extent in cells. The last column and row map to exactly 1.0.
pub fn normalized_position(column: u16, row: u16, columns: u16, rows: u16) -> (f64, f64) {
    let span_x = f64::from(columns.saturating_sub(1).max(1));
    let span_y = f64::from(rows.saturating_sub(1).max(1));
    (
        (f64::from(column) / span_x).min(1.0),
        (f64::from(row) / span_y).min(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pointer_is_continue() {
        assert_eq!(map_position(None, DEFAULT_THRESHOLD).unwrap(), Action::Continue);
    }

    #[test]
    fn dominant_axis_picks_the_command() {
        // rel = (0.3, 0.0) and friends, well past the default threshold.
        assert_eq!(
            map_position(Some((0.8, 0.5)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Right)
        );
        assert_eq!(
            map_position(Some((0.2, 0.5)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Left)
        );
        assert_eq!(
            map_position(Some((0.5, 0.2)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Up)
        );
        assert_eq!(
            map_position(Some((0.5, 0.8)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Down)
        );
    }

    #[test]
    fn non_dominant_axis_never_fires() {
        // rel = (0.25, -0.375): vertical wins even though 0.25 clears the
        // threshold on its own.
        assert_eq!(
            map_position(Some((0.75, 0.125)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Up)
        );
    }

    #[test]
    fn centered_pointer_is_continue() {
        assert_eq!(map_position(Some((0.5, 0.5)), DEFAULT_THRESHOLD).unwrap(), Action::Continue);
        assert_eq!(
            map_position(Some((0.55, 0.45)), DEFAULT_THRESHOLD).unwrap(),
            Action::Continue
        );
    }

    #[test]
    fn equal_magnitudes_resolve_on_the_vertical_axis() {
        // rel = (0.25, -0.25): the tie goes to the vertical branch.
        assert_eq!(
            map_position(Some((0.75, 0.25)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Up)
        );
        // rel = (-0.25, 0.25): likewise, downward.
        assert_eq!(
            map_position(Some((0.25, 0.75)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Down)
        );
    }

    #[test]
    fn threshold_boundary_is_strict() {
        // Exactly representable: rel_x = 0.25 with threshold 0.25.
        assert_eq!(map_position(Some((0.75, 0.5)), 0.25).unwrap(), Action::Continue);
        assert_eq!(
            map_position(Some((0.75 + 1e-9, 0.5)), 0.25).unwrap(),
            Action::Move(Direction::Right)
        );
        assert_eq!(map_position(Some((0.25, 0.5)), 0.25).unwrap(), Action::Continue);
        assert_eq!(
            map_position(Some((0.25 - 1e-9, 0.5)), 0.25).unwrap(),
            Action::Move(Direction::Left)
        );
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert!(map_position(Some((1.2, 0.5)), DEFAULT_THRESHOLD).is_err());
        assert!(map_position(Some((0.5, -0.1)), DEFAULT_THRESHOLD).is_err());
    }

    #[test]
    fn frame_corners_map_diagonally_to_vertical() {
        // Corners tie on both axes, so the vertical branch decides.
        assert_eq!(
            map_position(Some((0.0, 0.0)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Up)
        );
        assert_eq!(
            map_position(Some((1.0, 1.0)), DEFAULT_THRESHOLD).unwrap(),
            Action::Move(Direction::Down)
        );
    }

    #[test]
    fn terminal_cells_normalize_into_the_unit_square() {
        assert_eq!(normalized_position(0, 0, 80, 24), (0.0, 0.0));
        assert_eq!(normalized_position(79, 23, 80, 24), (1.0, 1.0));

        let (x, y) = normalized_position(40, 12, 81, 25);
        assert!((x - 0.5).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);

        // Degenerate one-cell terminal must not divide by zero.
        let (x, y) = normalized_position(0, 0, 1, 1);
        assert_eq!((x, y), (0.0, 0.0));
    }
}
