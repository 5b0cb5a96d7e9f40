//! Continuous pointer input and its mapping onto steering commands.

pub mod mapper;

pub use mapper::{map_position, normalized_position, GestureConfig, DEFAULT_THRESHOLD};
