//! Keyboard input decoding

pub mod handler;

pub use handler::{InputHandler, KeyAction};
