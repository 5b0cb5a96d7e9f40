//! hand_snake - Snake steered by a continuous pointer position
//!
//! This library provides:
//! - Core game rules (game module): snake motion, growth, food, collisions
//! - Pointer-to-command mapping (gesture module)
//! - Keyboard input handling (input module)
//! - TUI rendering (render module)
//! - Interactive play modes (modes module): keyboard and pointer
//! - Session counters (metrics module)

pub mod game;
pub mod gesture;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
