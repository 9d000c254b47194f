//! UI Module
//!
//! Terminal user interface using ratatui.

pub mod components;
pub mod renderer;

// Re-exports
pub use components::{ListViewState, MessageType};
pub use renderer::{Content, Renderer, UiState, View};
