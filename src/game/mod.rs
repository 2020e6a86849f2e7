//! Core game logic for Snake
//!
//! Everything in here is pure state-machine code with no I/O or rendering
//! dependencies; the driver loop in `modes` feeds it input and ticks.

pub mod board;
pub mod config;
pub mod engine;
pub mod food;
pub mod snake;
pub mod types;

// Re-export commonly used types
pub use board::Board;
pub use config::{Difficulty, GameConfig, WallPolicy};
pub use engine::GameEngine;
pub use food::{BoardFull, Food};
pub use snake::Snake;
pub use types::{Direction, GameState, Position};
