//! Core game rules: snake motion and growth, food placement, collisions.
//!
//! Nothing in here touches a terminal, a clock, or an input device; the
//! module advances purely on [`GameEngine::tick`] calls and is equally
//! drivable from a keyboard, a pointer, or a test.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{CollisionKind, GameEngine, TickOutcome};
pub use state::{GameState, GameStatus, Position, Snake};
