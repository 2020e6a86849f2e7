//! TUI Snake - classic Snake played in the terminal
//!
//! This library provides:
//! - Core game logic with no I/O dependencies (game module)
//! - Keyboard input decoding (input module)
//! - ratatui rendering (render module)
//! - File-backed high-score persistence (score module)
//! - The interactive driver loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
