//! UI Components
//!
//! Reusable TUI widgets for the form desk.

pub mod form;
pub mod list;
pub mod popup;
pub mod statusline;

// Re-exports
pub use form::FormWidget;
pub use list::{EmptyState, ListViewState, RecordTable, TableRow};
pub use popup::ConfirmDialog;
pub use statusline::{HelpBar, MessageType, StatusLine};
