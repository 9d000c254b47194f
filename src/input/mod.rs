//! Input Module
//!
//! Modal key handling.

pub mod handler;
pub mod keymap;
pub mod modes;

pub use handler::InputHandler;
pub use keymap::Action;
pub use modes::{InputMode, ModeState};
